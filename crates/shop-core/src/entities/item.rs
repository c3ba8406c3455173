//! Item entity - a sellable catalog entry

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Units on hand, never negative
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn new(name: String, price: f64, stock: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `quantity` units can be taken from stock
    #[inline]
    pub fn has_stock_for(&self, quantity: i32) -> bool {
        self.stock >= quantity
    }

    /// Price of `quantity` units at the current unit price
    #[inline]
    pub fn price_for(&self, quantity: i32) -> f64 {
        self.price * f64::from(quantity)
    }

    /// Overwrite every editable field
    pub fn replace(&mut self, name: String, price: f64, stock: i32) {
        self.name = name;
        self.price = price;
        self.stock = stock;
        self.updated_at = Utc::now();
    }
}
