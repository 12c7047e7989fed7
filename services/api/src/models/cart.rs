//! Cart models for request and response payloads

use serde::{Deserialize, Serialize};

/// Request to apply a quantity delta to a cart line
///
/// Quantity semantics are additive: repeated requests for the same
/// (user, food) pair accumulate, and a quantity of zero removes the line.
#[derive(Debug, Deserialize)]
pub struct CartUpsertRequest {
    pub user_id: i64,
    pub food_id: i64,
    pub quantity: i64,
}

/// Request identifying one cart line
#[derive(Debug, Deserialize)]
pub struct CartLineRef {
    pub user_id: i64,
    pub food_id: i64,
}

/// Request to clear a user's cart
#[derive(Debug, Deserialize)]
pub struct ClearCartRequest {
    pub user_id: i64,
}

/// One entry of a user's cart: the joined food item plus its quantity
#[derive(Debug, Clone, Serialize)]
pub struct CartEntry {
    pub id: i64,
    pub category: String,
    pub name: String,
    #[serde(rename = "shortDescription")]
    pub short_description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub description: String,
    pub quantity: i64,
}

/// One row of the global cart overview (administrative/reporting)
#[derive(Debug, Clone, Serialize)]
pub struct CartOverviewEntry {
    pub username: String,
    pub food_id: i64,
    pub quantity: i64,
    pub name: String,
}
