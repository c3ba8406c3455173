//! Item service
//!
//! Catalog listing and admin-only catalog mutation. The role gate is applied
//! by the caller before any of the mutating methods run.

use shop_core::Item;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{ItemDraft, ItemRequest, ItemResponse, MessageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Item service
pub struct ItemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ItemService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every live item
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ItemResponse>> {
        let items = self.ctx.item_repo().list().await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    /// Create an item
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: ItemRequest) -> ServiceResult<ItemResponse> {
        let ItemDraft { name, price, stock } = request.into_draft()?;

        let item = Item::new(name, price, stock);
        self.ctx.item_repo().create(&item).await?;

        info!(item_id = %item.id, "Item created");
        Ok(ItemResponse::from(item))
    }

    /// Overwrite every field of an existing item
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: ItemRequest) -> ServiceResult<ItemResponse> {
        let ItemDraft { name, price, stock } = request.into_draft()?;

        let mut item = self
            .ctx
            .item_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Item", id.to_string()))?;

        item.replace(name, price, stock);
        self.ctx.item_repo().update(&item).await?;

        info!(item_id = %item.id, "Item updated");
        Ok(ItemResponse::from(item))
    }

    /// Soft delete an item
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<MessageResponse> {
        self.ctx.item_repo().delete(id).await?;

        info!(item_id = %id, "Item deleted");
        Ok(MessageResponse::new("Item deleted successfully"))
    }
}
