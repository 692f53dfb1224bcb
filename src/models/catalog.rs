use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// Categorias do catálogo. Os valores persistidos são os rótulos em
// português, iguais aos que as telas exibem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "item_category")]
pub enum ItemCategory {
    Equipamento,
    Consumo,
    Ferramenta,
}

// Item do catálogo global, independente de qualquer almoxarifado.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: ItemCategory,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keeps_portuguese_labels() {
        assert_eq!(
            serde_json::to_string(&ItemCategory::Equipamento).unwrap(),
            "\"Equipamento\""
        );
        assert_eq!(
            serde_json::to_string(&ItemCategory::Ferramenta).unwrap(),
            "\"Ferramenta\""
        );
        let parsed: ItemCategory = serde_json::from_str("\"Consumo\"").unwrap();
        assert_eq!(parsed, ItemCategory::Consumo);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(serde_json::from_str::<ItemCategory>("\"Peça\"").is_err());
    }
}
