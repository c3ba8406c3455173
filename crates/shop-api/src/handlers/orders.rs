//! Order handlers

use axum::{extract::State, Json};
use shop_service::dto::{OrderCreatedResponse, OrderRequest};
use shop_service::OrderService;

use crate::extractors::{ClientUser, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Place an order
///
/// POST /orders (also mounted at /transactions)
pub async fn create_order(
    State(state): State<AppState>,
    ClientUser(identity): ClientUser,
    JsonBody(request): JsonBody<OrderRequest>,
) -> ApiResult<Created<Json<OrderCreatedResponse>>> {
    let service = OrderService::new(state.service_context());
    let response = service.place(&identity, request).await?;
    Ok(Created(Json(response)))
}
