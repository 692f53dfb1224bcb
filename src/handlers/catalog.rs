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
    events::TABLE_ITEMS,
    models::catalog::{Item, ItemCategory},
};

// ---
// Payload: ItemPayload (o formulário usa a mesma forma para criar e editar)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "O SKU é obrigatório."))]
    pub sku: String,

    pub category: ItemCategory,
}

// ---
// Handler: list_items
// ---
#[utoipa::path(
    get,
    path = "/api/catalog/items",
    responses((status = 200, description = "Catálogo em ordem alfabética", body = Vec<Item>)),
    tag = "Catalog"
)]
pub async fn list_items(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.item_repo.list().await?;
    Ok((StatusCode::OK, Json(items)))
}

// ---
// Handler: create_item
// ---
#[utoipa::path(
    post,
    path = "/api/catalog/items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item criado", body = Item),
        (status = 400, description = "Campos inválidos")
    ),
    tag = "Catalog"
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    Json(payload): Json<ItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Validação antes de qualquer escrita: nome/SKU vazios nem chegam ao banco.
    payload.validate().map_err(AppError::ValidationError)?;

    let item = app_state
        .item_repo
        .create(&payload.name, &payload.sku, payload.category)
        .await?;

    app_state.change_feed.publish(TABLE_ITEMS);
    Ok((StatusCode::CREATED, Json(item)))
}

// ---
// Handler: update_item
// ---
#[utoipa::path(
    put,
    path = "/api/catalog/items/{id}",
    params(("id" = Uuid, Path, description = "ID do item")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item atualizado", body = Item),
        (status = 404, description = "Item não encontrado")
    ),
    tag = "Catalog"
)]
pub async fn update_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let item = app_state
        .item_repo
        .update(id, &payload.name, &payload.sku, payload.category)
        .await?;

    app_state.change_feed.publish(TABLE_ITEMS);
    Ok((StatusCode::OK, Json(item)))
}

// ---
// Handler: delete_item
// ---
#[utoipa::path(
    delete,
    path = "/api/catalog/items/{id}",
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 204, description = "Item excluído"),
        (status = 404, description = "Item não encontrado")
    ),
    tag = "Catalog"
)]
pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.item_repo.delete(id).await?;

    app_state.change_feed.publish(TABLE_ITEMS);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected_before_any_write() {
        let payload = ItemPayload {
            name: "".into(),
            sku: "FUR-01".into(),
            category: ItemCategory::Ferramenta,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn empty_sku_is_rejected() {
        let payload = ItemPayload {
            name: "Furadeira".into(),
            sku: "".into(),
            category: ItemCategory::Ferramenta,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn complete_payload_passes() {
        let payload = ItemPayload {
            name: "Furadeira".into(),
            sku: "FUR-01".into(),
            category: ItemCategory::Ferramenta,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn payload_parses_from_camel_case_json() {
        let payload: ItemPayload = serde_json::from_str(
            r#"{"name":"Furadeira","sku":"FUR-01","category":"Ferramenta"}"#,
        )
        .unwrap();
        assert_eq!(payload.category, ItemCategory::Ferramenta);
    }
}
