//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

use crate::models::SignupRequest;
use crate::models::cart::CartUpsertRequest;

/// Validate a signup payload: all fields present, email well formed
pub fn validate_signup(request: &SignupRequest) -> Result<(), String> {
    if request.username.trim().is_empty() {
        return Err("Username is required".to_string());
    }

    if request.username.len() > 64 {
        return Err("Username must be at most 64 characters long".to_string());
    }

    validate_email(&request.email)?;

    if request.password.is_empty() {
        return Err("Password is required".to_string());
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > 254 {
        return Err("Email must be at most 254 characters long".to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate a cart quantity update before any store access
pub fn validate_cart_upsert(request: &CartUpsertRequest) -> Result<(), String> {
    if request.user_id <= 0 {
        return Err("user_id must be a positive integer".to_string());
    }

    if request.food_id <= 0 {
        return Err("food_id must be a positive integer".to_string());
    }

    if request.quantity < 0 {
        return Err("quantity must be a non-negative integer".to_string());
    }

    Ok(())
}
