//! User handlers

use axum::{extract::State, Json};
use shop_service::dto::ProfileResponse;
use shop_service::UserService;

use crate::extractors::ClientUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the caller's profile with order history
///
/// GET /myprofiles
pub async fn get_profile(
    State(state): State<AppState>,
    ClientUser(identity): ClientUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let profile = service.profile(&identity).await?;
    Ok(Json(profile))
}
