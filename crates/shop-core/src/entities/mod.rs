//! Domain entities - core business objects

mod item;
mod order;
mod user;

pub use item::Item;
pub use order::{Order, OrderDetails, OrderLine, OrderLineDetails};
pub use user::User;
