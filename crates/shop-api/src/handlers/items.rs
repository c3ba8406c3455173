//! Item handlers
//!
//! Anyone may browse the catalog; writes require the admin role.

use axum::{extract::State, Json};
use shop_service::dto::{ItemRequest, ItemResponse, MessageResponse};
use shop_service::ItemService;

use crate::extractors::{AdminUser, IdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List live items
///
/// GET /items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    let items = service.list().await?;
    Ok(Json(items))
}

/// Create an item
///
/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    JsonBody(request): JsonBody<ItemRequest>,
) -> ApiResult<Created<Json<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    let item = service.create(request).await?;
    Ok(Created(Json(item)))
}

/// Replace every field of an item
///
/// PUT /items/:id
pub async fn update_item(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<ItemRequest>,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    let item = service.update(id, request).await?;
    Ok(Json(item))
}

/// Soft-delete an item
///
/// DELETE /items/:id
pub async fn delete_item(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = ItemService::new(state.service_context());
    let response = service.delete(id).await?;
    Ok(Json(response))
}
