//! Guest service - RSVP confirmations.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Rsvp;
use crate::errors::AppResult;
use crate::infra::GuestRepository;

#[async_trait]
pub trait GuestService: Send + Sync {
    /// Record an attendance confirmation, returning its id
    async fn confirm(&self, rsvp: Rsvp) -> AppResult<i32>;
}

pub struct GuestManager {
    guests: Arc<dyn GuestRepository>,
}

impl GuestManager {
    pub fn new(guests: Arc<dyn GuestRepository>) -> Self {
        Self { guests }
    }
}

#[async_trait]
impl GuestService for GuestManager {
    async fn confirm(&self, rsvp: Rsvp) -> AppResult<i32> {
        let id = self.guests.create(rsvp.normalized()).await?;
        tracing::info!(rsvp_id = id, "Attendance confirmed");
        Ok(id)
    }
}
