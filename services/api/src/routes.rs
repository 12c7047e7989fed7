//! API service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use common::error::DatabaseError;
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        LoginRequest, SignupRequest,
        cart::{CartLineRef, CartUpsertRequest, ClearCartRequest},
        food::CreateFoodRequest,
    },
    state::AppState,
    validation,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/users", get(list_users))
        .route("/food/add", post(add_food))
        .route("/food", get(list_food))
        .route("/food/:id", get(get_food))
        .route("/food/delete/:id", delete(delete_food))
        .route("/cart/info", get(cart_overview))
        .route("/cart/add", post(cart_add))
        .route("/cart/remove", post(cart_remove))
        .route("/cart/clear", post(cart_clear))
        .route("/cart/:user_id", get(user_cart))
        .with_state(state)
}

/// Root health-check endpoint
pub async fn root() -> impl IntoResponse {
    "Welcome to the Red Onion API!"
}

/// Register a new user
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    let user_id = state.credentials.register(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User created successfully",
            "user_id": user_id,
        })),
    ))
}

/// Authenticate a user, returning a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let response = state.credentials.authenticate(&payload).await?;
    Ok(Json(response))
}

/// Get all users (password hashes are never serialized)
pub async fn list_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.user_repository.list_all().await?;
    Ok(Json(users))
}

/// Add a new food item to the catalog
pub async fn add_food(
    State(state): State<AppState>,
    Json(payload): Json<CreateFoodRequest>,
) -> ApiResult<impl IntoResponse> {
    let item = payload.validate().map_err(|missing| {
        ApiError::Validation(format!(
            "Please provide all required fields ({})",
            missing.join(", ")
        ))
    })?;

    let food_id = state.food_repository.create(&item).await?;

    Ok(Json(json!({
        "message": "Food item added successfully",
        "foodId": food_id,
    })))
}

/// Get all food items
pub async fn list_food(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let items = state.food_repository.list().await?;
    Ok(Json(items))
}

/// Get a specific food item by its id
pub async fn get_food(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let item = state
        .food_repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Food item not found".to_string()))?;

    Ok(Json(item))
}

/// Delete a specific food item by its id
///
/// A food item still referenced by cart lines is protected by the foreign
/// key constraint; the delete is blocked and surfaces as a conflict.
pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state
        .food_repository
        .delete_by_id(id)
        .await
        .map_err(|e| match e {
            DatabaseError::ForeignKeyViolation(_) => ApiError::Conflict(
                "Food item is still referenced by existing carts".to_string(),
            ),
            other => ApiError::Database(other),
        })?;

    if !deleted {
        return Err(ApiError::NotFound("Food item not found".to_string()));
    }

    Ok(Json(json!({"message": "Food item deleted successfully"})))
}

/// Get the global cart overview with usernames (reporting)
pub async fn cart_overview(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let entries = state.cart_repository.overview().await?;
    Ok(Json(entries))
}

/// Apply a quantity delta to a user's cart line
pub async fn cart_add(
    State(state): State<AppState>,
    Json(payload): Json<CartUpsertRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_cart_upsert(&payload).map_err(ApiError::Validation)?;

    state
        .cart_repository
        .set_quantity(payload.user_id, payload.food_id, payload.quantity)
        .await?;

    let message = if payload.quantity == 0 {
        "Item removed from cart successfully"
    } else {
        "Food item added/updated in cart successfully"
    };

    Ok(Json(json!({"message": message})))
}

/// Remove one line from a user's cart
pub async fn cart_remove(
    State(state): State<AppState>,
    Json(payload): Json<CartLineRef>,
) -> ApiResult<impl IntoResponse> {
    state
        .cart_repository
        .remove_line(payload.user_id, payload.food_id)
        .await?;

    Ok(Json(
        json!({"message": "Food item removed from cart successfully"}),
    ))
}

/// Clear every line of a user's cart
pub async fn cart_clear(
    State(state): State<AppState>,
    Json(payload): Json<ClearCartRequest>,
) -> ApiResult<impl IntoResponse> {
    state.cart_repository.clear(payload.user_id).await?;

    Ok(Json(json!({"message": "Cart cleared successfully"})))
}

/// Get a user's cart lines joined against the catalog
pub async fn user_cart(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let entries = state.cart_repository.lines_for_user(user_id).await?;
    Ok(Json(entries))
}
