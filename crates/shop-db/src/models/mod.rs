//! Database models - SQLx-compatible structs for PostgreSQL tables

mod item;
mod order;
mod user;

pub use item::ItemModel;
pub use order::{OrderLineWithItemModel, OrderModel};
pub use user::UserModel;
