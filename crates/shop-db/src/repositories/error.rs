//! Error handling utilities for repositories

use shop_core::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation on the users table to the matching conflict
pub fn map_user_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some("users_username_key") => DomainError::UsernameAlreadyExists,
                _ => DomainError::EmailAlreadyExists,
            };
        }
    }
    map_db_error(e)
}

/// Create an "item not found" error
pub fn item_not_found(id: Uuid) -> DomainError {
    DomainError::ItemNotFound(id)
}
