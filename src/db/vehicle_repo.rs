use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::vehicle::Vehicle};

#[derive(Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, name, created_at FROM vehicles ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(vehicles)
    }

    pub async fn create(&self, name: &str) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(vehicle)
    }

    pub async fn update(&self, id: Uuid, name: &str) -> Result<Vehicle, AppError> {
        sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2
            WHERE id = $1
            RETURNING id, name, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::VehicleNotFound)
    }

    // O estoque associado cai junto por cascata no banco; esta camada não
    // toca nas linhas de `inventory`.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::VehicleNotFound);
        }
        Ok(())
    }
}
