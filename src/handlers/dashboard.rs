use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::AppError, config::AppState, models::dashboard::DashboardSummary};

// Contadores do painel do gestor.
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses((status = 200, description = "Contadores do painel", body = DashboardSummary)),
    tag = "Dashboard"
)]
pub async fn get_summary(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.dashboard_repo.get_summary().await?;
    Ok((StatusCode::OK, Json(summary)))
}
