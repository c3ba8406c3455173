//! Request DTOs for API endpoints
//!
//! Text and number fields are optional so that an absent field can be told
//! apart from a present one. Presence checks run first, in field order, with a
//! fixed message each; `validator` format rules run after them.

use serde::Deserialize;
use shop_core::Role;
use validator::Validate;

use crate::services::{ServiceError, ServiceResult};

/// Return the trimmed value, or a validation error carrying `message`
fn required<'a>(value: Option<&'a str>, message: &str) -> ServiceResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServiceError::validation(message)),
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub full_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: Option<String>,

    #[serde(default)]
    pub is_admin: bool,
}

/// A complete, validated registration
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    /// Check presence then format, yielding the account fields
    ///
    /// # Errors
    /// Returns the first missing field's message, then any format violations
    pub fn into_account(mut self) -> ServiceResult<NewAccount> {
        let full_name = required(self.full_name.as_deref(), "Name is required")?.to_string();
        let email = required(self.email.as_deref(), "Email is required")?.to_string();
        let password = match self.password.as_deref() {
            Some(p) if !p.trim().is_empty() => p.to_string(),
            _ => return Err(ServiceError::validation("Password is required")),
        };
        let username = required(self.username.as_deref(), "Username is required")?.to_string();

        // Format rules see the trimmed values
        self.full_name = Some(full_name.clone());
        self.email = Some(email.clone());
        self.username = Some(username.clone());
        self.validate()?;

        Ok(NewAccount {
            full_name,
            email,
            username,
            password,
            role: Role::from_admin_flag(self.is_admin),
        })
    }
}

/// User login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// # Errors
    /// Returns the first missing field's message
    pub fn credentials(&self) -> ServiceResult<(&str, &str)> {
        let email = required(self.email.as_deref(), "Email is required")?;
        // Passwords are compared verbatim, only emptiness is checked
        let password = match self.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(ServiceError::validation("Password is required")),
        };
        Ok((email, password))
    }
}

// ============================================================================
// Item Requests
// ============================================================================

/// Create or replace an item
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ItemRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,
}

/// A complete, validated item payload
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub price: f64,
    pub stock: i32,
}

impl ItemRequest {
    /// Check presence then format, yielding the item fields.
    ///
    /// A price or stock of exactly zero counts as missing.
    ///
    /// # Errors
    /// Returns the first missing field's message, then any format violations
    pub fn into_draft(mut self) -> ServiceResult<ItemDraft> {
        let name = required(self.name.as_deref(), "Name is required")?.to_string();
        let price = match self.price {
            Some(p) if p != 0.0 && p.is_finite() => p,
            _ => return Err(ServiceError::validation("Price is required")),
        };
        let stock = match self.stock {
            Some(s) if s != 0 => s,
            _ => return Err(ServiceError::validation("Quantity is required")),
        };

        self.name = Some(name.clone());
        self.validate()?;

        Ok(ItemDraft { name, price, stock })
    }
}

// ============================================================================
// Order Requests
// ============================================================================

/// One requested item/quantity pair
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderLineRequest {
    #[serde(default)]
    pub item_id: String,

    #[serde(default)]
    pub quantity: i32,
}

/// Place an order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub paid_amount: f64,

    #[serde(default, alias = "transaction_detail")]
    pub lines: Vec<OrderLineRequest>,
}
