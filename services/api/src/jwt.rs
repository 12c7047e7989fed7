//! JWT service for bearer token issuance and validation
//!
//! Tokens are signed with HS256 using a shared secret and carry the user id
//! plus a time-bounded expiration. No token state is kept server-side.

use anyhow::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Token expiration time in seconds (default: 1 hour)
    pub token_expiry: u64,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `JWT_SECRET`: HS256 signing secret (default: `secretKey`)
    /// - `JWT_TOKEN_EXPIRY`: token expiry in seconds (default: 3600)
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, falling back to the built-in default secret");
            "secretKey".to_string()
        });

        let token_expiry = std::env::var("JWT_TOKEN_EXPIRY")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600);

        JwtConfig {
            secret,
            token_expiry,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: i64,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_expiry: u64,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: &JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtService {
            encoding_key,
            decoding_key,
            validation,
            token_expiry: config.token_expiry,
        }
    }

    /// Issue a signed token embedding the user id
    pub fn issue_token(&self, user_id: i64) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| anyhow::anyhow!("Failed to get current time: {}", e))?
            .as_secs();

        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.token_expiry,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a token and return the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Get the configured token expiry time in seconds
    pub fn token_expiry(&self) -> u64 {
        self.token_expiry
    }
}
