//! Database module for handling MySQL connections and operations
//!
//! This module provides connection pooling, configuration, and health checks
//! for the MySQL database.

use crate::error::{DatabaseError, DatabaseResult};
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use std::env;
use std::time::Duration;
use tracing::{error, info};

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MySQL host
    pub host: String,
    /// MySQL port
    pub port: u16,
    /// MySQL user
    pub user: String,
    /// MySQL password
    pub password: String,
    /// Database name
    pub database: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections in the pool
    pub min_connections: u32,
    /// Connection acquire timeout in seconds
    pub connection_timeout: u64,
}

impl DatabaseConfig {
    /// Create a new DatabaseConfig from environment variables
    ///
    /// # Environment Variables
    /// - `DB_HOST`: MySQL host (default: `localhost`)
    /// - `DB_PORT`: MySQL port (default: `3306`)
    /// - `DB_USER`: MySQL user (default: `root`)
    /// - `DB_PASS`: MySQL password (default: empty)
    /// - `DB_NAME`: database name (default: `red_onion`)
    /// - `DATABASE_MAX_CONNECTIONS`: pool upper bound (default: 10)
    /// - `DATABASE_MIN_CONNECTIONS`: pool lower bound (default: 5)
    /// - `DATABASE_CONNECTION_TIMEOUT`: acquire timeout in seconds (default: 30)
    pub fn from_env() -> DatabaseResult<Self> {
        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());

        let port = match env::var("DB_PORT") {
            Ok(value) => value.parse().map_err(|_| {
                DatabaseError::Configuration(format!("Invalid DB_PORT value: {}", value))
            })?,
            Err(_) => 3306,
        };

        let user = env::var("DB_USER").unwrap_or_else(|_| "root".to_string());
        let password = env::var("DB_PASS").unwrap_or_default();
        let database = env::var("DB_NAME").unwrap_or_else(|_| "red_onion".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let min_connections = env::var("DATABASE_MIN_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let connection_timeout = env::var("DATABASE_CONNECTION_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            user,
            password,
            database,
            max_connections,
            min_connections,
            connection_timeout,
        })
    }

    /// Build the sqlx connect options for this configuration
    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

/// Initialize a MySQL connection pool
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<MySqlPool>` - MySQL connection pool or error
pub async fn init_pool(config: &DatabaseConfig) -> DatabaseResult<MySqlPool> {
    info!(
        "Initializing database connection pool for {}@{}:{}/{}",
        config.user, config.host, config.port, config.database
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect_with(config.connect_options())
        .await
        .map_err(DatabaseError::Connection)?;

    info!("Database connection pool initialized successfully");
    Ok(pool)
}

/// Check database connectivity
///
/// # Arguments
///
/// * `pool` - MySQL connection pool
///
/// # Returns
///
/// * `DatabaseResult<bool>` - True if database is reachable, false otherwise
pub async fn health_check(pool: &MySqlPool) -> DatabaseResult<bool> {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => {
            info!("Database health check successful");
            Ok(true)
        }
        Err(e) => {
            error!("Database health check failed: {}", e);
            Ok(false)
        }
    }
}
