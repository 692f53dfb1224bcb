use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError, config::AppState, handlers::submissions::DecisionPayload,
    models::request::RequestView,
};

// Tela "Ver Solicitações".
#[utoipa::path(
    get,
    path = "/api/requests",
    responses((status = 200, description = "Solicitações com itens pedidos", body = Vec<RequestView>)),
    tag = "Requests"
)]
pub async fn list_requests(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let requests = app_state.request_service.list().await?;
    Ok((StatusCode::OK, Json(requests)))
}

#[utoipa::path(
    patch,
    path = "/api/requests/{id}/status",
    params(("id" = Uuid, Path, description = "ID da solicitação")),
    request_body = DecisionPayload,
    responses(
        (status = 204, description = "Status atualizado"),
        (status = 404, description = "Solicitação não encontrada")
    ),
    tag = "Requests"
)]
pub async fn update_request_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DecisionPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .request_service
        .set_status(id, payload.decision)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
