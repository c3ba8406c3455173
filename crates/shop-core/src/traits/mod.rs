//! Repository traits (ports)

mod repositories;

pub use repositories::{ItemRepository, OrderRepository, RepoResult, UserRepository};
