//! Service Container - Centralized service construction and access.
//!
//! Wires repositories, the password hasher, and the token issuer into the
//! application services once at startup.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AuthService, Authenticator, GiftManager, GiftService, GuestManager, GuestService, TokenIssuer,
};
use crate::config::Config;
use crate::domain::PasswordHasher;
use crate::errors::AppResult;
use crate::infra::{GiftStore, GuestStore, UserStore};

/// Concrete service container
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub guests: Arc<dyn GuestService>,
    pub gifts: Arc<dyn GiftService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(
        auth: Arc<dyn AuthService>,
        guests: Arc<dyn GuestService>,
        gifts: Arc<dyn GiftService>,
    ) -> Self {
        Self {
            auth,
            guests,
            gifts,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: DatabaseConnection, config: &Config) -> AppResult<Self> {
        let auth = Authenticator::new(
            Arc::new(UserStore::new(db.clone())),
            PasswordHasher::new(config.bcrypt_cost),
            TokenIssuer::from_config(config),
        )?;

        Ok(Self {
            auth: Arc::new(auth),
            guests: Arc::new(GuestManager::new(Arc::new(GuestStore::new(db.clone())))),
            gifts: Arc::new(GiftManager::new(Arc::new(GiftStore::new(db)))),
        })
    }
}
