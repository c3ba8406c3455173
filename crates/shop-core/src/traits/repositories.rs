//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every read skips soft-deleted rows unless
//! stated otherwise.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Item, Order, OrderDetails, OrderLine, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user with an already hashed password
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
}

// ============================================================================
// Item Repository
// ============================================================================

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find item by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Item>>;

    /// List every live item
    async fn list(&self) -> RepoResult<Vec<Item>>;

    /// Create a new item
    async fn create(&self, item: &Item) -> RepoResult<()>;

    /// Overwrite name, price and stock of an existing item
    async fn update(&self, item: &Item) -> RepoResult<()>;

    /// Soft delete an item
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Order Repository
// ============================================================================

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist an order with its lines and take each line's quantity out of stock.
    ///
    /// All-or-nothing: if any line's item is gone, short on stock, or priced
    /// differently from the line's captured unit price, nothing is written.
    async fn place(&self, order: &Order, lines: &[OrderLine]) -> RepoResult<()>;

    /// List a user's orders, newest first, including lines that reference
    /// soft-deleted items
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<OrderDetails>>;
}
