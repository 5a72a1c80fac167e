//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{AuthService, GiftService, GuestService, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and token verification
    pub auth_service: Arc<dyn AuthService>,
    /// RSVP confirmations
    pub guest_service: Arc<dyn GuestService>,
    /// Gift registry
    pub gift_service: Arc<dyn GiftService>,
    /// Database connection pool
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from the database pool and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let services = Services::from_connection(database.get_connection(), config)?;
        Ok(Self::new(services, database))
    }

    /// Create application state with manually injected services.
    pub fn new(services: Services, database: Arc<Database>) -> Self {
        Self {
            auth_service: services.auth,
            guest_service: services.guests,
            gift_service: services.gifts,
            database,
        }
    }
}
