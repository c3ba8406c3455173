//! User entity <-> model mapper

use shop_core::{Role, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            username: model.username,
            role: Role::from_admin_flag(model.is_admin),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
