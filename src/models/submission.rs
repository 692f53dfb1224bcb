use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::status::ReviewStatus;

// Linha crua da tabela `submissions`, como sai de um INSERT ... RETURNING.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub status: ReviewStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Submissão com os nomes do técnico e do almoxarifado já juntados,
// para a tela de conferência do gestor.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubmissionMeta {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub status: ReviewStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub vehicle_name: String,
}

// Item contado de uma submissão, juntado ao nome no catálogo.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionItemDetail {
    #[serde(skip_serializing)]
    pub submission_id: Uuid,
    pub item_id: Uuid,
    pub item_name: String,
    pub previous_quantity: i32,
    pub reported_quantity: i32,
}

// O que a tela de conferência recebe: pai + itens contados.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub user_name: String,
    pub vehicle_name: String,
    pub status: ReviewStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<SubmissionItemDetail>,
}

impl SubmissionView {
    pub fn assemble(meta: SubmissionMeta, items: Vec<SubmissionItemDetail>) -> Self {
        Self {
            id: meta.id,
            user_id: meta.user_id,
            vehicle_id: meta.vehicle_id,
            user_name: meta.user_name,
            vehicle_name: meta.vehicle_name,
            status: meta.status,
            notes: meta.notes,
            created_at: meta.created_at,
            items,
        }
    }
}
