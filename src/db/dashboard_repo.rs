use sqlx::PgPool;

use crate::{common::error::AppError, models::dashboard::DashboardSummary};

// Contadores agregados para o painel do gestor.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_summary(&self) -> Result<DashboardSummary, AppError> {
        let items = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        let vehicles = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;
        let users = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        let pending_submissions = sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM submissions WHERE status = 'pending'",
        )
        .fetch_one(&self.pool)
        .await?;
        let pending_requests = sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM requests WHERE status = 'pending'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DashboardSummary {
            items,
            vehicles,
            users,
            pending_submissions,
            pending_requests,
        })
    }
}
