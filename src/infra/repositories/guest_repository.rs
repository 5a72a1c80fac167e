//! RSVP confirmation persistence.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use super::entities::rsvp::{ActiveModel, Entity as RsvpEntity};
use crate::domain::Rsvp;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Insert a confirmation, returning the assigned id
    async fn create(&self, rsvp: Rsvp) -> AppResult<i32>;
}

pub struct GuestStore {
    db: DatabaseConnection,
}

impl GuestStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GuestRepository for GuestStore {
    async fn create(&self, rsvp: Rsvp) -> AppResult<i32> {
        let active_model = ActiveModel {
            name: Set(rsvp.name),
            bringing_companion: Set(rsvp.bringing_companion),
            companions: Set(rsvp.companions),
            has_restriction: Set(rsvp.has_restriction),
            restriction: Set(rsvp.restriction),
            ..Default::default()
        };

        let result = RsvpEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.last_insert_id)
    }
}
