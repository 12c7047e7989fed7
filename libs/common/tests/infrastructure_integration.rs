//! Integration tests for the infrastructure components
//!
//! These tests verify that the MySQL database is properly configured and
//! accessible from the application. They skip silently when no database is
//! reachable so the suite can run without local infrastructure.

use common::database::{DatabaseConfig, health_check, init_pool};
use sqlx::Row;

/// Test that verifies MySQL is accessible and can answer a trivial query
#[tokio::test]
async fn test_infrastructure_integration() -> Result<(), Box<dyn std::error::Error>> {
    let db_config = DatabaseConfig::from_env()?;
    let pool = match init_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("skipping infrastructure test, database not reachable: {}", e);
            return Ok(());
        }
    };

    assert!(health_check(&pool).await?, "Database health check failed");

    let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;
    let result: i32 = row.get("result");
    assert_eq!(result, 1, "MySQL simple query test failed");

    Ok(())
}
