use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::catalog::{Item, ItemCategory},
};

// Repositório do catálogo global de itens.
#[derive(Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Item>, AppError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, sku, category, created_at FROM items ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn create(
        &self,
        name: &str,
        sku: &str,
        category: ItemCategory,
    ) -> Result<Item, AppError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, sku, category)
            VALUES ($1, $2, $3)
            RETURNING id, name, sku, category, created_at
            "#,
        )
        .bind(name)
        .bind(sku)
        .bind(category)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        sku: &str,
        category: ItemCategory,
    ) -> Result<Item, AppError> {
        sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $2, sku = $3, category = $4
            WHERE id = $1
            RETURNING id, name, sku, category, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(sku)
        .bind(category)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ItemNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::ItemNotFound);
        }
        Ok(())
    }
}
