use serde::Serialize;
use utoipa::ToSchema;

// Contadores do painel do gestor.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub items: i64,
    pub vehicles: i64,
    pub users: i64,
    pub pending_submissions: i64,
    pub pending_requests: i64,
}
