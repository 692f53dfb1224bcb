use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::status::ReviewStatus;

// Linha crua da tabela `requests`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: ReviewStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Solicitação com o nome do solicitante juntado.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RequestMeta {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: ReviewStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
}

// Item pedido, juntado ao nome no catálogo.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestItemDetail {
    #[serde(skip_serializing)]
    pub request_id: Uuid,
    pub item_id: Uuid,
    pub item_name: String,
    pub requested_quantity: i32,
}

// O que a tela de solicitações recebe: pai + itens pedidos.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub status: ReviewStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<RequestItemDetail>,
}

impl RequestView {
    pub fn assemble(meta: RequestMeta, items: Vec<RequestItemDetail>) -> Self {
        Self {
            id: meta.id,
            user_id: meta.user_id,
            user_name: meta.user_name,
            status: meta.status,
            notes: meta.notes,
            created_at: meta.created_at,
            items,
        }
    }
}
