//! Authenticated identity

use uuid::Uuid;

use super::Role;

/// Who is calling, as established by a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

impl Identity {
    pub const fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
