//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use super::constants::{
    DEFAULT_BCRYPT_COST, DEFAULT_CORS_ALLOWED_ORIGIN, DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECONDS,
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_JWT_TTL_SECONDS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MAX_BCRYPT_COST, MAX_JWT_TTL_SECONDS, MIN_BCRYPT_COST,
};

/// Startup configuration failures. All of them are fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    database_url: String,
    pub database_max_connections: u32,
    pub database_acquire_timeout: Duration,
    jwt_secret: String,
    pub jwt_ttl_seconds: i64,
    pub bcrypt_cost: u32,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origin: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("database_acquire_timeout", &self.database_acquire_timeout)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_ttl_seconds", &self.jwt_ttl_seconds)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_allowed_origin", &self.cors_allowed_origin)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `JWT_SECRET` or `DATABASE_URL` is missing,
    /// or if any numeric setting fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = required(&lookup, "JWT_SECRET")?;
        let database_url = required(&lookup, "DATABASE_URL")?;

        let jwt_ttl_seconds = parsed(&lookup, "JWT_TTL_SECONDS", DEFAULT_JWT_TTL_SECONDS)?;
        if !(1..=MAX_JWT_TTL_SECONDS).contains(&jwt_ttl_seconds) {
            return Err(ConfigError::Invalid {
                var: "JWT_TTL_SECONDS",
                reason: format!("must be between 1 and {}", MAX_JWT_TTL_SECONDS),
            });
        }

        let bcrypt_cost = parsed(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                var: "BCRYPT_COST",
                reason: format!("must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            });
        }

        let database_max_connections = parsed(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        let acquire_timeout_seconds = parsed(
            &lookup,
            "DATABASE_ACQUIRE_TIMEOUT_SECONDS",
            DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECONDS,
        )?;

        Ok(Self {
            database_url,
            database_max_connections,
            database_acquire_timeout: Duration::from_secs(acquire_timeout_seconds),
            jwt_secret,
            jwt_ttl_seconds,
            bcrypt_cost,
            server_host: lookup("SERVER_HOST")
                .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: parsed(&lookup, "PORT", DEFAULT_SERVER_PORT)?,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string()),
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the database connection string.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// A required, non-blank variable.
fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
}

/// An optional variable with a default; present but unparsable is an error.
fn parsed<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
