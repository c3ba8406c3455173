//! User service
//!
//! The caller's own profile together with their order history.

use shop_core::Identity;
use tracing::instrument;

use crate::dto::ProfileResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Profile of the authenticated user, orders newest first
    #[instrument(skip(self), fields(user_id = %identity.user_id))]
    pub async fn profile(&self, identity: &Identity) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(identity.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", identity.user_id.to_string()))?;

        let orders = self.ctx.order_repo().find_by_user(user.id).await?;

        Ok(ProfileResponse::new(user, orders))
    }
}
