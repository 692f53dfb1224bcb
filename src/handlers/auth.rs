use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, rbac::home_route},
    models::auth::{AuthResponse, LoginPayload, User},
};

// Handler de login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Sessão criada", body = AuthResponse),
        (status = 401, description = "Usuário ou senha inválidos")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let (user, token) = app_state
        .auth_service
        .login(&payload.name, &payload.password)
        .await?;

    // O cliente usa `home` para resolver o redirecionamento da rota raiz.
    let home = home_route(user.role).to_string();

    Ok(Json(AuthResponse { token, user, home }))
}

// A sessão é o próprio token: sair é o cliente descartá-lo. Não existe
// revogação no servidor.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 204, description = "Sessão encerrada")),
    tag = "Auth"
)]
pub async fn logout(AuthenticatedUser(_user): AuthenticatedUser) -> StatusCode {
    StatusCode::NO_CONTENT
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses((status = 200, description = "Usuário autenticado", body = User)),
    tag = "Auth"
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<User> {
    Json(user)
}
