//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    // The process-wide random part keeps reruns against one database apart
    format!("{}{n}", &Uuid::new_v4().simple().to_string()[..8])
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

impl RegisterRequest {
    pub fn unique(is_admin: bool) -> Self {
        let suffix = unique_suffix();
        Self {
            full_name: format!("Test User {suffix}"),
            email: format!("test{suffix}@example.com"),
            username: format!("testuser{suffix}"),
            password: "TestPass123!".to_string(),
            is_admin,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Item create/update request
#[derive(Debug, Serialize)]
pub struct ItemRequest {
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl ItemRequest {
    pub fn unique(price: f64, stock: i32) -> Self {
        Self {
            name: format!("Item {}", unique_suffix()),
            price,
            stock,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderLineRequest {
    pub item_id: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct OrderRequest {
    pub paid_amount: f64,
    pub lines: Vec<OrderLineRequest>,
}

impl OrderRequest {
    pub fn single(item_id: &str, quantity: i32, paid_amount: f64) -> Self {
        Self {
            paid_amount,
            lines: vec![OrderLineRequest {
                item_id: item_id.to_string(),
                quantity,
            }],
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub role: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

#[derive(Debug, Deserialize)]
pub struct ItemRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineResponse {
    pub item: ItemRef,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
}

#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub total_price: f64,
    pub is_success_paid: bool,
    pub lines: Vec<OrderLineResponse>,
}

#[derive(Debug, Deserialize)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order: OrderResponse,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    pub orders: Vec<OrderResponse>,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Flat error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub detail: Option<serde_json::Value>,
}
