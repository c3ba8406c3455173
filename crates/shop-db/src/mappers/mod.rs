//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.

mod item;
mod order;
mod user;
