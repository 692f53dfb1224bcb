use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    events::TABLE_USERS,
    models::auth::{User, UserRole},
};

// ---
// Payload: CreateUserPayload
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub password: String,

    pub role: UserRole,

    // Só faz sentido para técnicos; para gestores é descartado.
    pub vehicle_id: Option<Uuid>,
}

// ---
// Payload: UpdateUserPayload (senha ausente ou vazia = mantém a atual)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    pub password: Option<String>,

    pub role: UserRole,

    pub vehicle_id: Option<Uuid>,
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "Usuários em ordem alfabética", body = Vec<User>)),
    tag = "Users"
)]
pub async fn list_users(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_repo.list().await?;
    Ok((StatusCode::OK, Json(users)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 400, description = "Campos inválidos"),
        (status = 409, description = "Nome de usuário já em uso")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    // Gestor não tem almoxarifado associado.
    let vehicle_id = match payload.role {
        UserRole::Technician => payload.vehicle_id,
        UserRole::Manager => None,
    };

    let password_hash = app_state.auth_service.hash_password(&payload.password).await?;

    let user = app_state
        .user_repo
        .create(
            &app_state.db_pool,
            &payload.name,
            &password_hash,
            payload.role,
            vehicle_id,
        )
        .await?;

    app_state.change_feed.publish(TABLE_USERS);
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "Usuário atualizado", body = User),
        (status = 404, description = "Usuário não encontrado"),
        (status = 409, description = "Nome de usuário já em uso")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let vehicle_id = match payload.role {
        UserRole::Technician => payload.vehicle_id,
        UserRole::Manager => None,
    };

    // Senha ausente ou vazia mantém o hash atual.
    let new_password = payload.password.as_deref().filter(|p| !p.is_empty());
    let password_hash = match new_password {
        Some(password) => Some(app_state.auth_service.hash_password(password).await?),
        None => None,
    };

    let user = app_state
        .user_repo
        .update(
            id,
            &payload.name,
            password_hash.as_deref(),
            payload.role,
            vehicle_id,
        )
        .await?;

    app_state.change_feed.publish(TABLE_USERS);
    Ok((StatusCode::OK, Json(user)))
}

// Excluir um usuário não arrasta nada: submissões e solicitações antigas
// continuam no histórico (o banco recusa a exclusão se houver vínculos).
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 204, description = "Usuário excluído"),
        (status = 404, description = "Usuário não encontrado")
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.user_repo.delete(id).await?;

    app_state.change_feed.publish(TABLE_USERS);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_password_are_required() {
        let payload = CreateUserPayload {
            name: "".into(),
            password: "123".into(),
            role: UserRole::Technician,
            vehicle_id: None,
        };
        assert!(payload.validate().is_err());

        let payload = CreateUserPayload {
            name: "Sérgio".into(),
            password: "".into(),
            role: UserRole::Technician,
            vehicle_id: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_without_password_is_valid() {
        let payload = UpdateUserPayload {
            name: "Sérgio".into(),
            password: None,
            role: UserRole::Manager,
            vehicle_id: None,
        };
        assert!(payload.validate().is_ok());
    }
}
