//! # shop-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use services::{
    AuthService, ItemService, OrderService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
