//! PostgreSQL implementation of OrderRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};
use uuid::Uuid;

use shop_core::{
    DomainError, Order, OrderDetails, OrderLine, OrderLineDetails, OrderRepository, RepoResult,
};

use crate::models::{OrderLineWithItemModel, OrderModel};

use super::error::{item_not_found, map_db_error};

/// PostgreSQL implementation of OrderRepository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new PgOrderRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Take `line.quantity` units out of stock and insert the line.
    ///
    /// The decrement only matches a live item with enough stock, so two
    /// concurrent checkouts can never drive stock below zero.
    async fn reserve_line(tx: &mut Transaction<'_, Postgres>, line: &OrderLine) -> RepoResult<()> {
        let locked_price = sqlx::query_scalar::<_, f64>(
            r"
            UPDATE items
            SET stock = stock - $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL AND stock >= $2
            RETURNING price
            ",
        )
        .bind(line.item_id)
        .bind(line.quantity)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?;

        let Some(price) = locked_price else {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS(SELECT 1 FROM items WHERE id = $1 AND deleted_at IS NULL)
                ",
            )
            .bind(line.item_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(map_db_error)?;

            return Err(if exists {
                DomainError::InsufficientStock(line.item_id)
            } else {
                item_not_found(line.item_id)
            });
        };

        if price != line.unit_price {
            return Err(DomainError::ItemChanged(line.item_id));
        }

        sqlx::query(
            r"
            INSERT INTO order_lines (id, order_id, item_id, quantity, unit_price, total_price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            ",
        )
        .bind(line.id)
        .bind(line.order_id)
        .bind(line.item_id)
        .bind(line.quantity)
        .bind(line.unit_price)
        .bind(line.total_price)
        .bind(line.created_at)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[instrument(skip(self, order, lines), fields(order_id = %order.id, user_id = %order.user_id, lines = lines.len()))]
    async fn place(&self, order: &Order, lines: &[OrderLine]) -> RepoResult<()> {
        // Dropping the transaction on any early return rolls it back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO orders (id, user_id, total_price, is_success_paid, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(order.id)
        .bind(order.user_id)
        .bind(order.total_price)
        .bind(order.is_success_paid)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for line in lines {
            Self::reserve_line(&mut tx, line).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        debug!("Order committed");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<OrderDetails>> {
        let orders = sqlx::query_as::<_, OrderModel>(
            r"
            SELECT id, user_id, total_price, is_success_paid, created_at, updated_at
            FROM orders
            WHERE user_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC, id
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();

        // Soft-deleted items are joined too; history must keep showing them
        let line_rows = sqlx::query_as::<_, OrderLineWithItemModel>(
            r"
            SELECT ol.id, ol.order_id, ol.item_id, ol.quantity, ol.unit_price, ol.total_price,
                   ol.created_at, i.name AS item_name
            FROM order_lines ol
            JOIN items i ON i.id = ol.item_id
            WHERE ol.order_id = ANY($1) AND ol.deleted_at IS NULL
            ORDER BY ol.created_at, ol.id
            ",
        )
        .bind(&order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut lines_by_order: HashMap<Uuid, Vec<OrderLineDetails>> = HashMap::new();
        for row in line_rows {
            lines_by_order
                .entry(row.order_id)
                .or_default()
                .push(OrderLineDetails::from(row));
        }

        Ok(orders
            .into_iter()
            .map(|model| {
                let lines = lines_by_order.remove(&model.id).unwrap_or_default();
                OrderDetails {
                    order: Order::from(model),
                    lines,
                }
            })
            .collect())
    }
}
