//! Gift registry persistence.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::gift::{self, ActiveModel, Entity as GiftEntity};
use crate::domain::{Gift, NewGift};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GiftRepository: Send + Sync {
    /// Insert a gift, returning the assigned id
    async fn create(&self, gift: NewGift) -> AppResult<i32>;

    /// All gifts in insertion order
    async fn list(&self) -> AppResult<Vec<Gift>>;
}

pub struct GiftStore {
    db: DatabaseConnection,
}

impl GiftStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GiftRepository for GiftStore {
    async fn create(&self, gift: NewGift) -> AppResult<i32> {
        let active_model = ActiveModel {
            name: Set(gift.name),
            image: Set(gift.image),
            link: Set(gift.link),
            ..Default::default()
        };

        let result = GiftEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.last_insert_id)
    }

    async fn list(&self) -> AppResult<Vec<Gift>> {
        let models = GiftEntity::find()
            .order_by_asc(gift::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Gift::from).collect())
    }
}
