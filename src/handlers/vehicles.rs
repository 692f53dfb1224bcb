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
    events::{TABLE_INVENTORY, TABLE_VEHICLES},
    models::inventory::{InventoryItemView, InventoryLevel},
    models::vehicle::Vehicle,
};

// ---
// Payload: VehiclePayload
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VehiclePayload {
    #[validate(length(min = 1, message = "O nome do almoxarifado é obrigatório."))]
    pub name: String,
}

// ---
// Payload: InventoryLevelPayload (saldo absoluto de um item no almoxarifado)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InventoryLevelPayload {
    #[validate(range(min = 0, message = "A quantidade não pode ser negativa."))]
    pub quantity: i32,
}

#[utoipa::path(
    get,
    path = "/api/vehicles",
    responses((status = 200, description = "Almoxarifados em ordem alfabética", body = Vec<Vehicle>)),
    tag = "Vehicles"
)]
pub async fn list_vehicles(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = app_state.vehicle_repo.list().await?;
    Ok((StatusCode::OK, Json(vehicles)))
}

#[utoipa::path(
    post,
    path = "/api/vehicles",
    request_body = VehiclePayload,
    responses(
        (status = 201, description = "Almoxarifado criado", body = Vehicle),
        (status = 400, description = "Campos inválidos")
    ),
    tag = "Vehicles"
)]
pub async fn create_vehicle(
    State(app_state): State<AppState>,
    Json(payload): Json<VehiclePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let vehicle = app_state.vehicle_repo.create(&payload.name).await?;

    app_state.change_feed.publish(TABLE_VEHICLES);
    Ok((StatusCode::CREATED, Json(vehicle)))
}

#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    params(("id" = Uuid, Path, description = "ID do almoxarifado")),
    request_body = VehiclePayload,
    responses(
        (status = 200, description = "Almoxarifado atualizado", body = Vehicle),
        (status = 404, description = "Almoxarifado não encontrado")
    ),
    tag = "Vehicles"
)]
pub async fn update_vehicle(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VehiclePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let vehicle = app_state.vehicle_repo.update(id, &payload.name).await?;

    app_state.change_feed.publish(TABLE_VEHICLES);
    Ok((StatusCode::OK, Json(vehicle)))
}

// A exclusão leva junto o estoque associado — cascata do banco, não desta
// camada.
#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    params(("id" = Uuid, Path, description = "ID do almoxarifado")),
    responses(
        (status = 204, description = "Almoxarifado excluído"),
        (status = 404, description = "Almoxarifado não encontrado")
    ),
    tag = "Vehicles"
)]
pub async fn delete_vehicle(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vehicle_repo.delete(id).await?;

    app_state.change_feed.publish(TABLE_VEHICLES);
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/inventory",
    params(("id" = Uuid, Path, description = "ID do almoxarifado")),
    responses((status = 200, description = "Estoque do almoxarifado", body = Vec<InventoryItemView>)),
    tag = "Vehicles"
)]
pub async fn get_vehicle_inventory(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state.inventory_repo.list_for_vehicle(id).await?;
    Ok((StatusCode::OK, Json(rows)))
}

#[utoipa::path(
    put,
    path = "/api/vehicles/{id}/inventory/{item_id}",
    params(
        ("id" = Uuid, Path, description = "ID do almoxarifado"),
        ("item_id" = Uuid, Path, description = "ID do item")
    ),
    request_body = InventoryLevelPayload,
    responses(
        (status = 200, description = "Saldo definido", body = InventoryLevel),
        (status = 404, description = "Almoxarifado ou item não encontrado")
    ),
    tag = "Vehicles"
)]
pub async fn set_inventory_level(
    State(app_state): State<AppState>,
    Path((vehicle_id, item_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<InventoryLevelPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let level = app_state
        .inventory_repo
        .upsert_level(vehicle_id, item_id, payload.quantity)
        .await?;

    app_state.change_feed.publish(TABLE_INVENTORY);
    Ok((StatusCode::OK, Json(level)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vehicle_name_is_rejected() {
        let payload = VehiclePayload { name: "".into() };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let payload = InventoryLevelPayload { quantity: -1 };
        assert!(payload.validate().is_err());
        let payload = InventoryLevelPayload { quantity: 0 };
        assert!(payload.validate().is_ok());
    }
}
