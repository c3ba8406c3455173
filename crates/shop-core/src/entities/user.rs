//! User entity - a registered shop account

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Role;

/// User entity. The password hash is kept out of the entity and only
/// travels through the repository when registering or authenticating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with a fresh id
    pub fn new(full_name: String, email: String, username: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            username,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
