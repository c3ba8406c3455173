//! Role gates
//!
//! Pure predicates applied after authentication and before a use case runs.
//! Admin-only and client-only gates are mutually exclusive.

use shop_core::{DomainError, Identity, Role};

use super::error::ServiceResult;

/// Pass iff `identity` holds exactly `role`
///
/// # Errors
/// Returns `DomainError::RoleRequired` (403) otherwise
pub fn require_role(identity: &Identity, role: Role) -> ServiceResult<()> {
    if identity.role == role {
        Ok(())
    } else {
        tracing::debug!(user_id = %identity.user_id, required = %role, "Role gate rejected request");
        Err(DomainError::RoleRequired(role).into())
    }
}

/// # Errors
/// Returns a 403 error unless the caller is an admin
pub fn require_admin(identity: &Identity) -> ServiceResult<()> {
    require_role(identity, Role::Admin)
}

/// # Errors
/// Returns a 403 error unless the caller is a client
pub fn require_client(identity: &Identity) -> ServiceResult<()> {
    require_role(identity, Role::Client)
}
