//! Value objects - immutable types that represent domain concepts

mod identity;
mod role;

pub use identity::Identity;
pub use role::{Role, RoleParseError};
