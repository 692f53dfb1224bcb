use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{User, UserRole},
};

// O repositório de usuários, responsável por todas as interações com a
// tabela 'users'.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca usuários pelo nome, sem diferenciar maiúsculas/minúsculas.
    // Devolve todas as linhas que casarem: o serviço de login exige
    // exatamente uma (semântica de `single()`).
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, password_hash, role, vehicle_id, created_at
            FROM users
            WHERE lower(name) = lower($1)
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, password_hash, role, vehicle_id, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_user)
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, password_hash, role, vehicle_id, created_at
            FROM users
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    // Cria um novo usuário, com tratamento específico para nome duplicado.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        password_hash: &str,
        role: UserRole,
        vehicle_id: Option<Uuid>,
    ) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, password_hash, role, vehicle_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, password_hash, role, vehicle_id, created_at
            "#,
        )
        .bind(name)
        .bind(password_hash)
        .bind(role)
        .bind(vehicle_id)
        .fetch_one(executor)
        .await
        .map_err(map_name_conflict)
    }

    // Atualiza um usuário; o hash da senha só muda quando um novo é passado.
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        password_hash: Option<&str>,
        role: UserRole,
        vehicle_id: Option<Uuid>,
    ) -> Result<User, AppError> {
        let updated = match password_hash {
            Some(hash) => {
                sqlx::query_as::<_, User>(
                    r#"
                    UPDATE users
                    SET name = $2, password_hash = $3, role = $4, vehicle_id = $5
                    WHERE id = $1
                    RETURNING id, name, password_hash, role, vehicle_id, created_at
                    "#,
                )
                .bind(id)
                .bind(name)
                .bind(hash)
                .bind(role)
                .bind(vehicle_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_name_conflict)?
            }
            None => {
                sqlx::query_as::<_, User>(
                    r#"
                    UPDATE users
                    SET name = $2, role = $3, vehicle_id = $4
                    WHERE id = $1
                    RETURNING id, name, password_hash, role, vehicle_id, created_at
                    "#,
                )
                .bind(id)
                .bind(name)
                .bind(role)
                .bind(vehicle_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_name_conflict)?
            }
        };

        updated.ok_or(AppError::UserNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::UserNotFound);
        }
        Ok(())
    }
}

// O índice único sobre lower(name) garante a unicidade case-insensitive;
// a violação vira um 409 com mensagem própria.
fn map_name_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() && db_err.constraint() == Some("idx_users_name_lower") {
            return AppError::NameAlreadyExists;
        }
    }
    e.into()
}
