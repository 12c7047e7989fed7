//! User repository for database operations

use common::error::{DatabaseError, DatabaseResult};
use sqlx::{MySqlPool, Row};
use tracing::info;

use crate::models::User;

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: MySqlPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return its id
    ///
    /// The password must already be hashed by the caller.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> DatabaseResult<i64> {
        info!("Creating new user: {}", username);

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(result.last_insert_id() as i64)
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(row.map(|row| User {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            created_at: row.get("created_at"),
        }))
    }

    /// Get all users
    pub async fn list_all(&self) -> DatabaseResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        let users = rows
            .into_iter()
            .map(|row| User {
                id: row.get("id"),
                username: row.get("username"),
                email: row.get("email"),
                password_hash: row.get("password_hash"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(users)
    }
}
