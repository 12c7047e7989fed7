use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod auth;
mod error;
mod jwt;
mod models;
mod repositories;
mod routes;
mod state;
mod validation;

use common::database::{DatabaseConfig, health_check, init_pool};
use tower_http::cors::CorsLayer;

use crate::{
    auth::CredentialService,
    jwt::{JwtConfig, JwtService},
    repositories::{CartRepository, FoodRepository, UserRepository},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting Red Onion API");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Apply schema migrations
    sqlx::migrate!().run(&pool).await?;
    info!("Database schema is up to date");

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env();
    let jwt_service = JwtService::new(&jwt_config);

    let user_repository = UserRepository::new(pool.clone());
    let food_repository = FoodRepository::new(pool.clone());
    let cart_repository = CartRepository::new(pool.clone());
    let credentials = CredentialService::new(user_repository.clone(), jwt_service);

    let app_state = AppState {
        credentials,
        user_repository,
        food_repository,
        cart_repository,
    };

    // Start the web server; the browser frontend lives on another origin
    let app = routes::create_router(app_state).layer(CorsLayer::permissive());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Red Onion API listening on 0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
