//! PostgreSQL implementation of ItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use shop_core::{Item, ItemRepository, RepoResult};

use crate::models::ItemModel;

use super::error::{item_not_found, map_db_error};

/// PostgreSQL implementation of ItemRepository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    /// Create a new PgItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Item>> {
        let result = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, name, price, stock, created_at, updated_at
            FROM items
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, name, price, stock, created_at, updated_at
            FROM items
            WHERE deleted_at IS NULL
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self), fields(item_id = %item.id))]
    async fn create(&self, item: &Item) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO items (id, name, price, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.stock)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(item_id = %item.id))]
    async fn update(&self, item: &Item) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE items
            SET name = $2, price = $3, stock = $4, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.stock)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE items
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(id));
        }

        Ok(())
    }
}
