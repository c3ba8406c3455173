//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in shop-core.

mod error;
mod item;
mod order;
mod user;

pub use item::PgItemRepository;
pub use order::PgOrderRepository;
pub use user::PgUserRepository;
