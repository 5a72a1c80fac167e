//! Authentication service - Registration and login.
//!
//! Register: presence check, trim, hash, persist.
//! Login: lookup, verify, issue token, strip the hash from the returned user.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use super::token::{Claims, TokenIssuer};
use crate::config::MSG_REGISTER_FIELDS_REQUIRED;
use crate::domain::password::normalize;
use crate::domain::{NewUser, Password, PasswordHasher, UserId, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Outcome of a successful login
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: UserResponse,
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user, returning its id
    async fn register(&self, name: String, email: String, password: String) -> AppResult<UserId>;

    /// Check credentials and open a session
    async fn login(&self, email: String, password: String) -> AppResult<Session>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
    // Verified against when the email is unknown, so both failure paths cost the same.
    dummy_hash: Password,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: PasswordHasher,
        tokens: TokenIssuer,
    ) -> AppResult<Self> {
        let dummy_hash = hasher.hash("dummy-password-never-matches")?;
        Ok(Self {
            users,
            hasher,
            tokens,
            dummy_hash,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<UserId> {
        if name.trim().is_empty() || email.trim().is_empty() || normalize(&password).is_empty() {
            return Err(AppError::validation(MSG_REGISTER_FIELDS_REQUIRED));
        }

        let password_hash = self.hasher.hash_async(password).await?.into_string();

        let id = self
            .users
            .create(NewUser {
                name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = id, "User registered");
        Ok(id)
    }

    async fn login(&self, email: String, password: String) -> AppResult<Session> {
        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.hasher
                    .verify_async(password, self.dummy_hash.clone())
                    .await?;
                return Err(AppError::AccountNotFound);
            }
        };

        let stored = Password::from_hash(user.password_hash.clone());
        if !self.hasher.verify_async(password, stored).await? {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok(Session {
            user: UserResponse::from(user),
            token,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.verify(token)
    }
}
