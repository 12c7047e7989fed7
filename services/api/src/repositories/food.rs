//! Food catalog repository for database operations

use common::error::{DatabaseError, DatabaseResult};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::info;

use crate::models::food::{FoodItem, NewFoodItem};

/// Food catalog repository
#[derive(Clone)]
pub struct FoodRepository {
    pool: MySqlPool,
}

impl FoodRepository {
    /// Create a new food repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a new food item and return its id
    pub async fn create(&self, item: &NewFoodItem) -> DatabaseResult<i64> {
        info!("Adding food item to catalog: {}", item.name);

        let result = sqlx::query(
            r#"
            INSERT INTO food (category, name, shortDescription, price, image, description)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.category)
        .bind(&item.name)
        .bind(&item.short_description)
        .bind(item.price)
        .bind(&item.image)
        .bind(&item.description)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(result.last_insert_id() as i64)
    }

    /// Get all food items
    pub async fn list(&self) -> DatabaseResult<Vec<FoodItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, category, name, shortDescription, price, image, description
            FROM food
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(rows.into_iter().map(food_from_row).collect())
    }

    /// Find a food item by id
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<FoodItem>> {
        let row = sqlx::query(
            r#"
            SELECT id, category, name, shortDescription, price, image, description
            FROM food
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(row.map(food_from_row))
    }

    /// Delete a food item by id, returning whether a row was removed
    pub async fn delete_by_id(&self, id: i64) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM food WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(result.rows_affected() > 0)
    }
}

fn food_from_row(row: MySqlRow) -> FoodItem {
    FoodItem {
        id: row.get("id"),
        category: row.get("category"),
        name: row.get("name"),
        short_description: row.get("shortDescription"),
        price: row.get("price"),
        image: row.get("image"),
        description: row.get("description"),
    }
}
