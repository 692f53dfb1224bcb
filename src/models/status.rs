use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Estado de revisão de submissões e solicitações.
//
// Não há guarda de transição no servidor: a tela esconde os botões fora de
// `pending`, mas uma segunda decisão concorrente sobrescreve a primeira
// (last-write-wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "review_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

// Decisão do gestor sobre um registro pendente. `pending` fica de fora de
// propósito: o formato de rede não permite reabrir um registro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl From<Decision> for ReviewStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approved => ReviewStatus::Approved,
            Decision::Rejected => ReviewStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReviewStatus::Pending).unwrap(),
            "\"pending\""
        );
        let parsed: ReviewStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, ReviewStatus::Rejected);
    }

    #[test]
    fn decision_maps_onto_status() {
        assert_eq!(ReviewStatus::from(Decision::Approved), ReviewStatus::Approved);
        assert_eq!(ReviewStatus::from(Decision::Rejected), ReviewStatus::Rejected);
    }

    #[test]
    fn decision_cannot_reopen_a_record() {
        // "pending" não é uma decisão válida no fio.
        assert!(serde_json::from_str::<Decision>("\"pending\"").is_err());
    }
}
