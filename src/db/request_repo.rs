use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::request::{Request, RequestItemDetail, RequestMeta},
    models::status::ReviewStatus,
};

// Repositório das solicitações de material e de seus itens pedidos.
#[derive(Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<RequestMeta>, AppError> {
        let metas = sqlx::query_as::<_, RequestMeta>(
            r#"
            SELECT r.id, r.user_id, r.status, r.notes, r.created_at,
                   u.name AS user_name
            FROM requests r
            JOIN users u ON u.id = r.user_id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(metas)
    }

    pub async fn list_items(
        &self,
        request_ids: &[Uuid],
    ) -> Result<Vec<RequestItemDetail>, AppError> {
        let items = sqlx::query_as::<_, RequestItemDetail>(
            r#"
            SELECT ri.request_id, ri.item_id, it.name AS item_name,
                   ri.requested_quantity
            FROM request_items ri
            JOIN items it ON it.id = ri.item_id
            WHERE ri.request_id = ANY($1)
            "#,
        )
        .bind(request_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        notes: Option<&str>,
    ) -> Result<Request, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let request = sqlx::query_as::<_, Request>(
            r#"
            INSERT INTO requests (user_id, notes)
            VALUES ($1, $2)
            RETURNING id, user_id, status, notes, created_at
            "#,
        )
        .bind(user_id)
        .bind(notes)
        .fetch_one(executor)
        .await?;
        Ok(request)
    }

    pub async fn insert_item<'e, E>(
        &self,
        executor: E,
        request_id: Uuid,
        item_id: Uuid,
        requested_quantity: i32,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO request_items (request_id, item_id, requested_quantity)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(request_id)
        .bind(item_id)
        .bind(requested_quantity)
        .execute(executor)
        .await?;
        Ok(())
    }

    pub async fn set_status(&self, id: Uuid, status: ReviewStatus) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE requests SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
