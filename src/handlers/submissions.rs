use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError, config::AppState, models::status::Decision,
    models::submission::SubmissionView,
};

// Decisão do gestor sobre um registro pendente.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DecisionPayload {
    pub decision: Decision,
}

// Tela "Conferir Inventários": lista do mais novo para o mais antigo.
#[utoipa::path(
    get,
    path = "/api/submissions",
    responses((status = 200, description = "Submissões com itens contados", body = Vec<SubmissionView>)),
    tag = "Submissions"
)]
pub async fn list_submissions(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let submissions = app_state.submission_service.list().await?;
    Ok((StatusCode::OK, Json(submissions)))
}

#[utoipa::path(
    patch,
    path = "/api/submissions/{id}/status",
    params(("id" = Uuid, Path, description = "ID da submissão")),
    request_body = DecisionPayload,
    responses(
        (status = 204, description = "Status atualizado"),
        (status = 404, description = "Submissão não encontrada")
    ),
    tag = "Submissions"
)]
pub async fn update_submission_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DecisionPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .submission_service
        .set_status(id, payload.decision)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
