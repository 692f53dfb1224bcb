use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::status::ReviewStatus,
    models::submission::{Submission, SubmissionItemDetail, SubmissionMeta},
};

// Repositório das submissões de inventário e de seus itens contados.
#[derive(Clone)]
pub struct SubmissionRepository {
    pool: PgPool,
}

impl SubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // A tela de conferência lista do mais novo para o mais antigo, já com
    // os nomes do técnico e do almoxarifado.
    pub async fn list(&self) -> Result<Vec<SubmissionMeta>, AppError> {
        let metas = sqlx::query_as::<_, SubmissionMeta>(
            r#"
            SELECT s.id, s.user_id, s.vehicle_id, s.status, s.notes, s.created_at,
                   u.name AS user_name, v.name AS vehicle_name
            FROM submissions s
            JOIN users u ON u.id = s.user_id
            JOIN vehicles v ON v.id = s.vehicle_id
            ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(metas)
    }

    // Itens contados de um conjunto de submissões, juntados ao catálogo
    // para exibir o nome.
    pub async fn list_items(
        &self,
        submission_ids: &[Uuid],
    ) -> Result<Vec<SubmissionItemDetail>, AppError> {
        let items = sqlx::query_as::<_, SubmissionItemDetail>(
            r#"
            SELECT si.submission_id, si.item_id, it.name AS item_name,
                   si.previous_quantity, si.reported_quantity
            FROM submission_items si
            JOIN items it ON it.id = si.item_id
            WHERE si.submission_id = ANY($1)
            "#,
        )
        .bind(submission_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    // Cria o registro-pai; nasce sempre como 'pending' (default do banco).
    pub async fn create<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        vehicle_id: Uuid,
        notes: Option<&str>,
    ) -> Result<Submission, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (user_id, vehicle_id, notes)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, vehicle_id, status, notes, created_at
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .bind(notes)
        .fetch_one(executor)
        .await?;
        Ok(submission)
    }

    pub async fn insert_item<'e, E>(
        &self,
        executor: E,
        submission_id: Uuid,
        item_id: Uuid,
        previous_quantity: i32,
        reported_quantity: i32,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO submission_items
                (submission_id, item_id, previous_quantity, reported_quantity)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(submission_id)
        .bind(item_id)
        .bind(previous_quantity)
        .bind(reported_quantity)
        .execute(executor)
        .await?;
        Ok(())
    }

    // Atualização de um único campo, incondicional: não há guarda de
    // transição no servidor (last-write-wins).
    pub async fn set_status(&self, id: Uuid, status: ReviewStatus) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE submissions SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
