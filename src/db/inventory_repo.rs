use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::inventory::{InventoryItemView, InventoryLevel},
};

// Repositório do estoque por almoxarifado (a junção fraca `inventory`).
#[derive(Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // O que a tela de inventário consome: saldo juntado aos dados do item,
    // filtrado pelo almoxarifado.
    pub async fn list_for_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<InventoryItemView>, AppError> {
        let rows = sqlx::query_as::<_, InventoryItemView>(
            r#"
            SELECT inv.item_id, it.name, it.sku, it.category, inv.quantity
            FROM inventory inv
            JOIN items it ON it.id = inv.item_id
            WHERE inv.vehicle_id = $1
            ORDER BY it.name ASC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    // Define o saldo absoluto de um item em um almoxarifado.
    // "UPSERT" atômico: tenta INSERIR; se o par já existir (ON CONFLICT),
    // ATUALIZA a quantidade.
    pub async fn upsert_level(
        &self,
        vehicle_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<InventoryLevel, AppError> {
        sqlx::query_as::<_, InventoryLevel>(
            r#"
            INSERT INTO inventory (vehicle_id, item_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (vehicle_id, item_id)
            DO UPDATE SET quantity = EXCLUDED.quantity
            RETURNING vehicle_id, item_id, quantity
            "#,
        )
        .bind(vehicle_id)
        .bind(item_id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    match db_err.constraint() {
                        Some("inventory_vehicle_id_fkey") => return AppError::VehicleNotFound,
                        Some("inventory_item_id_fkey") => return AppError::ItemNotFound,
                        _ => {}
                    }
                }
            }
            e.into()
        })
    }
}
