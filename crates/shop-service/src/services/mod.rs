//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` and owns one use case area.

pub mod auth;
pub mod context;
pub mod error;
pub mod item;
pub mod order;
pub mod policy;
pub mod user;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use item::ItemService;
pub use order::OrderService;
pub use user::UserService;
