//! Order and order line entities
//!
//! An order is written once, together with its lines, and never edited.
//! Each line snapshots the item's unit price at checkout time so later
//! catalog price changes do not touch existing orders.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Item;

/// Order header
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Sum of the line totals, fixed at creation
    pub total_price: f64,
    pub is_success_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One item/quantity entry of an order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub id: Uuid,
    pub order_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i32,
    /// Item price captured at checkout
    pub unit_price: f64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl OrderLine {
    /// Snapshot `item`'s current price for `quantity` units
    pub fn snapshot(order_id: Uuid, item: &Item, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            item_id: item.id,
            quantity,
            unit_price: item.price,
            total_price: item.price_for(quantity),
            created_at: Utc::now(),
        }
    }
}

impl Order {
    /// Build a paid order and its lines from `(item, quantity)` picks.
    ///
    /// The header total is the sum of the line totals, accumulated in pick order.
    pub fn checkout(user_id: Uuid, picks: &[(Item, i32)]) -> (Self, Vec<OrderLine>) {
        let now = Utc::now();
        let id = Uuid::new_v4();

        let lines: Vec<OrderLine> = picks
            .iter()
            .map(|(item, quantity)| OrderLine::snapshot(id, item, *quantity))
            .collect();
        let total_price = lines.iter().map(|line| line.total_price).sum();

        let order = Self {
            id,
            user_id,
            total_price,
            is_success_paid: true,
            created_at: now,
            updated_at: now,
        };

        (order, lines)
    }
}

/// A line together with the referenced item's display data
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineDetails {
    pub line: OrderLine,
    pub item_name: String,
}

/// An order with all of its lines
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub order: Order,
    pub lines: Vec<OrderLineDetails>,
}
