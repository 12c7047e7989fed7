//! Cart repository: the reconciliation logic for per-user cart lines
//!
//! A cart line is identified by the (user_id, food_id) pair, which carries a
//! uniqueness constraint. Quantity updates are additive and expressed as one
//! atomic upsert so that concurrent requests for the same pair cannot race
//! into duplicate rows or lost increments. A zero quantity deletes the line
//! instead of persisting it.

use common::error::{DatabaseError, DatabaseResult};
use sqlx::{MySqlPool, Row};

use crate::models::cart::{CartEntry, CartOverviewEntry};

/// Cart repository
#[derive(Clone)]
pub struct CartRepository {
    pool: MySqlPool,
}

impl CartRepository {
    /// Create a new cart repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Apply a quantity delta to the (user, food) cart line
    ///
    /// A quantity of zero removes the line (idempotent: absence is not an
    /// error). A positive quantity increments an existing line or creates
    /// the line with that quantity, in a single statement.
    pub async fn set_quantity(
        &self,
        user_id: i64,
        food_id: i64,
        quantity: i64,
    ) -> DatabaseResult<()> {
        if quantity == 0 {
            return self.remove_line(user_id, food_id).await;
        }

        sqlx::query(
            r#"
            INSERT INTO cart (user_id, food_id, quantity)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE quantity = quantity + VALUES(quantity)
            "#,
        )
        .bind(user_id)
        .bind(food_id)
        .bind(quantity)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(())
    }

    /// Delete the (user, food) cart line; absence is not an error
    pub async fn remove_line(&self, user_id: i64, food_id: i64) -> DatabaseResult<()> {
        sqlx::query("DELETE FROM cart WHERE user_id = ? AND food_id = ?")
            .bind(user_id)
            .bind(food_id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(())
    }

    /// Delete every cart line for a user; an empty cart is not an error
    pub async fn clear(&self, user_id: i64) -> DatabaseResult<()> {
        sqlx::query("DELETE FROM cart WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(())
    }

    /// Get a user's cart lines joined against the catalog
    pub async fn lines_for_user(&self, user_id: i64) -> DatabaseResult<Vec<CartEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT food.id, food.category, food.name, food.shortDescription,
                   food.price, food.image, food.description, cart.quantity
            FROM cart
            JOIN food ON cart.food_id = food.id
            WHERE cart.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        let entries = rows
            .into_iter()
            .map(|row| CartEntry {
                id: row.get("id"),
                category: row.get("category"),
                name: row.get("name"),
                short_description: row.get("shortDescription"),
                price: row.get("price"),
                image: row.get("image"),
                description: row.get("description"),
                quantity: row.get("quantity"),
            })
            .collect();

        Ok(entries)
    }

    /// Get the global cart overview across all users (reporting)
    pub async fn overview(&self) -> DatabaseResult<Vec<CartOverviewEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT users.username, cart.food_id, cart.quantity, food.name
            FROM cart
            JOIN food ON cart.food_id = food.id
            JOIN users ON cart.user_id = users.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        let entries = rows
            .into_iter()
            .map(|row| CartOverviewEntry {
                username: row.get("username"),
                food_id: row.get("food_id"),
                quantity: row.get("quantity"),
                name: row.get("name"),
            })
            .collect();

        Ok(entries)
    }
}
