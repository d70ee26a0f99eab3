//! Authentication service - registration, login and token verification.
//!
//! Password handling lives in the domain `Password` value object; this
//! service issues and checks the HS256 tokens.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::db_error::map_db_error;
use crate::config::Config;
use crate::domain::{CurrentUser, NewUser, Password, User, UserResponse, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        CurrentUser {
            id: claims.sub,
            email: claims.email,
            role: UserRole::from(claims.role.as_str()),
        }
    }
}

/// Returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: UserResponse,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a regular user and sign them in
    async fn register(&self, name: String, email: String, password: String)
        -> AppResult<AuthResponse>;

    /// Exchange credentials for a token
    async fn login(&self, email: String, password: String) -> AppResult<AuthResponse>;

    /// Check signature, expiry, issuer and audience, then return the claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }

    fn issue(&self, user: User) -> AppResult<AuthResponse> {
        let token = generate_token(&user, &self.config)?;
        Ok(AuthResponse {
            token,
            user: UserResponse::from(user),
        })
    }
}

/// Sign a token for `user` with the configured secret and lifetime.
pub fn generate_token(user: &User, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.to_string(),
        iss: config.jwt_issuer.clone(),
        aud: config.jwt_audience.clone(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;
    Ok(token)
}

fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.jwt_issuer.as_str()]);
    validation.set_audience(&[config.jwt_audience.as_str()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> AppResult<AuthResponse> {
        let password_hash = Password::new(&password)?.into_string();

        let user = self
            .uow
            .users()
            .create(NewUser {
                name,
                email,
                password_hash,
                role: UserRole::User,
            })
            .await
            .map_err(map_db_error)?;

        tracing::info!(user_id = user.id, "User registered");
        self.issue(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<AuthResponse> {
        let user = self.uow.users().find_by_email(&email).await?;

        // Verify against a dummy hash for unknown emails so both failure
        // paths take the same time.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => Password::dummy(),
        };
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => {
                tracing::debug!(user_id = user.id, "User logged in");
                self.issue(user)
            }
            _ => {
                tracing::warn!("Failed login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}
