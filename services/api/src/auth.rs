//! Credential service: password hashing, verification, and login
//!
//! Passwords are hashed with argon2 and a random salt before they reach the
//! store; verification goes through the argon2 constant-time comparison.
//! Plaintext passwords are never logged, persisted, or echoed back.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use common::error::DatabaseError;
use tracing::{error, info};

use crate::error::{ApiError, ApiResult};
use crate::jwt::JwtService;
use crate::models::{LoginRequest, LoginResponse, SignupRequest};
use crate::repositories::UserRepository;
use crate::validation;

/// Credential service
#[derive(Clone)]
pub struct CredentialService {
    users: UserRepository,
    jwt: JwtService,
}

impl CredentialService {
    /// Create a new credential service
    pub fn new(users: UserRepository, jwt: JwtService) -> Self {
        Self { users, jwt }
    }

    /// Register a new user and return its id
    ///
    /// The password is hashed before the insert; a uniqueness violation on
    /// email or username surfaces as a conflict.
    pub async fn register(&self, request: &SignupRequest) -> ApiResult<i64> {
        validation::validate_signup(request).map_err(ApiError::Validation)?;

        let password_hash = hash_password(&request.password)?;

        let user_id = self
            .users
            .create(&request.username, &request.email, &password_hash)
            .await
            .map_err(|e| match e {
                DatabaseError::UniqueViolation(_) => ApiError::Conflict(
                    "An account with that email or username already exists".to_string(),
                ),
                other => ApiError::Database(other),
            })?;

        info!("Created user {} ({})", request.username, user_id);
        Ok(user_id)
    }

    /// Authenticate a user by email and password, issuing a bearer token
    pub async fn authenticate(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.jwt.issue_token(user.id).map_err(|e| {
            error!("Failed to issue token: {}", e);
            ApiError::Internal
        })?;

        Ok(LoginResponse {
            token,
            username: user.username,
            user_id: user.id,
        })
    }
}

/// Hash a plaintext password with argon2 and a fresh random salt
fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            error!("Password hashing failed: {}", e);
            ApiError::Hashing
        })?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored argon2 hash
fn verify_password(password: &str, password_hash: &str) -> ApiResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash).map_err(|e| {
        error!("Stored password hash is unparsable: {}", e);
        ApiError::Hashing
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtConfig;
    use common::database::{DatabaseConfig, init_pool};
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Store-backed fixture; `None` (skip) when no database is reachable,
    /// mirroring the cart repository tests.
    async fn store_backed_service() -> Option<(CredentialService, JwtService)> {
        let config = DatabaseConfig::from_env().ok()?;
        let pool = init_pool(&config).await.ok()?;
        sqlx::migrate!().run(&pool).await.ok()?;

        let jwt = JwtService::new(&JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry: 3600,
        });
        let service = CredentialService::new(UserRepository::new(pool), jwt.clone());
        Some((service, jwt))
    }

    fn unique_signup() -> SignupRequest {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        SignupRequest {
            username: format!("login_tester_{}", suffix),
            email: format!("login_{}@test.local", suffix),
            password: "pw123".to_string(),
        }
    }

    #[tokio::test]
    async fn signup_then_login_round_trips() {
        let Some((service, jwt)) = store_backed_service().await else {
            eprintln!("skipping credential test, database not reachable");
            return;
        };
        let request = unique_signup();

        let user_id = service.register(&request).await.unwrap();

        let response = service
            .authenticate(&LoginRequest {
                email: request.email.clone(),
                password: request.password.clone(),
            })
            .await
            .unwrap();
        assert_eq!(response.user_id, user_id);
        assert_eq!(response.username, request.username);

        let claims = jwt.validate_token(&response.token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, jwt.token_expiry());
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let Some((service, _jwt)) = store_backed_service().await else {
            eprintln!("skipping credential test, database not reachable");
            return;
        };
        let request = unique_signup();
        service.register(&request).await.unwrap();

        // Same email, different username
        let duplicate = SignupRequest {
            username: format!("{}_again", request.username),
            email: request.email.clone(),
            password: "pw123".to_string(),
        };
        let result = service.register(&duplicate).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn unknown_email_is_not_found() {
        let Some((service, _jwt)) = store_backed_service().await else {
            eprintln!("skipping credential test, database not reachable");
            return;
        };
        let request = unique_signup();

        let result = service
            .authenticate(&LoginRequest {
                email: request.email,
                password: request.password,
            })
            .await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let Some((service, _jwt)) = store_backed_service().await else {
            eprintln!("skipping credential test, database not reachable");
            return;
        };
        let request = unique_signup();
        service.register(&request).await.unwrap();

        let result = service
            .authenticate(&LoginRequest {
                email: request.email,
                password: "wrongpw".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
    }

    #[test]
    fn hash_is_never_the_plaintext() {
        let hash = hash_password("pw123").unwrap();
        assert_ne!(hash, "pw123");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn original_plaintext_verifies_against_its_hash() {
        let hash = hash_password("pw123").unwrap();
        assert!(verify_password("pw123", &hash).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("pw123").unwrap();
        assert!(!verify_password("wrongpw", &hash).unwrap());
    }

    #[test]
    fn two_hashes_of_the_same_password_differ() {
        // Fresh salt per hash
        let first = hash_password("pw123").unwrap();
        let second = hash_password("pw123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn garbage_stored_hash_is_an_internal_error() {
        let result = verify_password("pw123", "not-a-phc-string");
        assert!(matches!(result, Err(ApiError::Hashing)));
    }
}
