//! Application state shared across handlers

use crate::auth::CredentialService;
use crate::repositories::{CartRepository, FoodRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialService,
    pub user_repository: UserRepository,
    pub food_repository: FoodRepository,
    pub cart_repository: CartRepository,
}
