use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::catalog::Item,
    models::inventory::InventoryItemView,
    models::request::Request,
    models::submission::Submission,
    services::request_service::RequestedItem,
    services::submission_service::CountedItem,
};

// ---
// Payload: item contado no fechamento do inventário
// ---
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountedItemPayload {
    pub item_id: Uuid,

    #[validate(range(min = 0, message = "A quantidade não pode ser negativa."))]
    pub previous_quantity: i32,

    #[validate(range(min = 0, message = "A quantidade não pode ser negativa."))]
    pub reported_quantity: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInventoryPayload {
    #[validate(length(min = 1, message = "Inclua pelo menos um item contado."), nested)]
    pub items: Vec<CountedItemPayload>,

    pub notes: Option<String>,
}

// ---
// Payload: item pedido na solicitação de material
// ---
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestedItemPayload {
    pub item_id: Uuid,

    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero."))]
    pub requested_quantity: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestMaterialPayload {
    #[validate(length(min = 1, message = "Selecione pelo menos um item para solicitar."), nested)]
    pub items: Vec<RequestedItemPayload>,

    pub notes: Option<String>,
}

// Tela "Realizar Inventário": o técnico só enxerga o estoque do próprio
// almoxarifado.
#[utoipa::path(
    get,
    path = "/api/technician/inventory",
    responses(
        (status = 200, description = "Estoque do almoxarifado do técnico", body = Vec<InventoryItemView>),
        (status = 400, description = "Técnico sem almoxarifado associado")
    ),
    tag = "Technician"
)]
pub async fn get_inventory(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let vehicle_id = user.vehicle_id.ok_or(AppError::NoVehicleAssigned)?;

    let rows = app_state.inventory_repo.list_for_vehicle(vehicle_id).await?;
    Ok((StatusCode::OK, Json(rows)))
}

// Tela "Solicitar Material": o catálogo completo para montar o pedido.
#[utoipa::path(
    get,
    path = "/api/technician/catalog",
    responses((status = 200, description = "Catálogo em ordem alfabética", body = Vec<Item>)),
    tag = "Technician"
)]
pub async fn get_catalog(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = app_state.item_repo.list().await?;
    Ok((StatusCode::OK, Json(items)))
}

// Fecha a contagem do inventário: nasce pendente, aguardando o gestor.
#[utoipa::path(
    post,
    path = "/api/technician/submissions",
    request_body = SubmitInventoryPayload,
    responses(
        (status = 201, description = "Submissão criada como pendente", body = Submission),
        (status = 400, description = "Payload inválido ou técnico sem almoxarifado")
    ),
    tag = "Technician"
)]
pub async fn submit_inventory(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<SubmitInventoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let items: Vec<CountedItem> = payload
        .items
        .iter()
        .map(|item| CountedItem {
            item_id: item.item_id,
            previous_quantity: item.previous_quantity,
            reported_quantity: item.reported_quantity,
        })
        .collect();

    let submission = app_state
        .submission_service
        .create_submission(&user, &items, payload.notes.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(submission)))
}

// Pede material do catálogo; mesmo fluxo de aprovação das submissões.
#[utoipa::path(
    post,
    path = "/api/technician/requests",
    request_body = RequestMaterialPayload,
    responses(
        (status = 201, description = "Solicitação criada como pendente", body = Request),
        (status = 400, description = "Payload inválido")
    ),
    tag = "Technician"
)]
pub async fn request_material(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<RequestMaterialPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let items: Vec<RequestedItem> = payload
        .items
        .iter()
        .map(|item| RequestedItem {
            item_id: item.item_id,
            requested_quantity: item.requested_quantity,
        })
        .collect();

    let request = app_state
        .request_service
        .create_request(&user, &items, payload.notes.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item_list_is_rejected() {
        let payload = SubmitInventoryPayload {
            items: vec![],
            notes: None,
        };
        assert!(payload.validate().is_err());

        let payload = RequestMaterialPayload {
            items: vec![],
            notes: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn counted_item_quantities_must_be_non_negative() {
        let payload = SubmitInventoryPayload {
            items: vec![CountedItemPayload {
                item_id: Uuid::new_v4(),
                previous_quantity: 5,
                reported_quantity: -3,
            }],
            notes: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn requested_quantity_must_be_positive() {
        let payload = RequestMaterialPayload {
            items: vec![RequestedItemPayload {
                item_id: Uuid::new_v4(),
                requested_quantity: 0,
            }],
            notes: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn count_with_changed_quantity_passes() {
        // 5 -> 3, como na contagem típica de fechamento.
        let payload = SubmitInventoryPayload {
            items: vec![CountedItemPayload {
                item_id: Uuid::new_v4(),
                previous_quantity: 5,
                reported_quantity: 3,
            }],
            notes: Some("Consumo na obra".into()),
        };
        assert!(payload.validate().is_ok());
    }
}
