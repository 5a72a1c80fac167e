//! Gift service - Registry creation and listing.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Gift, NewGift};
use crate::errors::AppResult;
use crate::infra::GiftRepository;

#[async_trait]
pub trait GiftService: Send + Sync {
    /// Add a gift to the registry, returning its id
    async fn create(&self, gift: NewGift) -> AppResult<i32>;

    /// List every gift
    async fn list(&self) -> AppResult<Vec<Gift>>;
}

pub struct GiftManager {
    gifts: Arc<dyn GiftRepository>,
}

impl GiftManager {
    pub fn new(gifts: Arc<dyn GiftRepository>) -> Self {
        Self { gifts }
    }
}

#[async_trait]
impl GiftService for GiftManager {
    async fn create(&self, mut gift: NewGift) -> AppResult<i32> {
        gift.image = gift.image.filter(|url| !url.trim().is_empty());
        let id = self.gifts.create(gift).await?;
        tracing::info!(gift_id = id, "Gift registered");
        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<Gift>> {
        self.gifts.list().await
    }
}
