//! Axum extractors for request handling
//!
//! Custom extractors for authentication, role gates, JSON bodies and path ids.

mod auth;
mod json;
mod path;

pub use auth::{AdminUser, AuthUser, ClientUser};
pub use json::JsonBody;
pub use path::IdPath;
