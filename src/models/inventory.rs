use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::catalog::ItemCategory;

// Saldo bruto de um item em um almoxarifado (linha da tabela `inventory`).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLevel {
    pub vehicle_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i32,
}

// Linha da tela de inventário: o saldo já achatado com os dados do item,
// como a consulta `inventory -> items` devolve.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemView {
    pub item_id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: ItemCategory,
    pub quantity: i32,
}
