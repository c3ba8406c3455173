//! Order service
//!
//! Order placement runs in two phases:
//!
//! 1. Preflight, short-circuiting on the first failure: the paid amount must
//!    not be negative, at least one line is required, and each line in input
//!    order must name a well-formed live item with enough stock for the
//!    quantity requested so far. Prices accumulate into the required total,
//!    which must equal the paid amount exactly.
//! 2. Checkout: the order and its price-snapshot lines are handed to
//!    `OrderRepository::place`, which decrements stock and writes everything
//!    atomically, re-checking stock and price under lock.

use std::collections::HashMap;

use shop_core::{DomainError, Identity, Item, Order, OrderDetails, OrderLineDetails};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{OrderCreatedResponse, OrderLineRequest, OrderRequest, OrderResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Order service
pub struct OrderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OrderService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and place an order for `buyer`
    #[instrument(skip(self, request), fields(user_id = %buyer.user_id, lines = request.lines.len()))]
    pub async fn place(
        &self,
        buyer: &Identity,
        request: OrderRequest,
    ) -> ServiceResult<OrderCreatedResponse> {
        let picks = self.preflight(&request).await?;

        let (order, lines) = Order::checkout(buyer.user_id, &picks);
        self.ctx.order_repo().place(&order, &lines).await?;

        info!(order_id = %order.id, total_price = order.total_price, "Order placed");

        let details = OrderDetails {
            lines: lines
                .into_iter()
                .zip(&picks)
                .map(|(line, (item, _))| OrderLineDetails {
                    line,
                    item_name: item.name.clone(),
                })
                .collect(),
            order,
        };

        Ok(OrderCreatedResponse {
            message: "Order created successfully".to_string(),
            order: OrderResponse::from(details),
        })
    }

    /// Check the request against current catalog state and return the
    /// `(item, quantity)` picks in input order
    async fn preflight(&self, request: &OrderRequest) -> ServiceResult<Vec<(Item, i32)>> {
        if request.paid_amount < 0.0 || request.paid_amount.is_nan() {
            return Err(ServiceError::validation(
                "Paid amount must be greater than or equal to 0",
            ));
        }

        if request.lines.is_empty() {
            return Err(ServiceError::validation("Order lines are required"));
        }

        let mut picks = Vec::with_capacity(request.lines.len());
        let mut requested: HashMap<Uuid, i32> = HashMap::new();
        let mut required_total = 0.0;

        for line in &request.lines {
            let item_id = parse_line(line)?;

            let item = self
                .ctx
                .item_repo()
                .find_by_id(item_id)
                .await?
                .ok_or(DomainError::ItemNotFound(item_id))?;

            // Repeated lines for one item draw on the same stock
            let wanted = requested.entry(item_id).or_insert(0);
            *wanted = wanted.saturating_add(line.quantity);
            if !item.has_stock_for(*wanted) {
                return Err(DomainError::InsufficientStock(item_id).into());
            }

            required_total += item.price_for(line.quantity);
            picks.push((item, line.quantity));
        }

        if request.paid_amount != required_total {
            return Err(DomainError::PaymentMismatch {
                paid: request.paid_amount,
                required: required_total,
            }
            .into());
        }

        Ok(picks)
    }
}

fn parse_line(line: &OrderLineRequest) -> ServiceResult<Uuid> {
    let raw = line.item_id.trim();
    if raw.is_empty() {
        return Err(ServiceError::validation("Item ID is required"));
    }
    let item_id =
        Uuid::parse_str(raw).map_err(|_| ServiceError::validation("Invalid Item ID format"))?;

    if line.quantity <= 0 {
        return Err(ServiceError::validation("Quantity must be greater than 0"));
    }

    Ok(item_id)
}
