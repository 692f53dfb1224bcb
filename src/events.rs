//! Feed de mudanças em processo, sobre um canal `tokio::sync::broadcast`.
//!
//! Cada escrita bem-sucedida publica um [`ChangeEvent`] para a tabela
//! afetada: "algo mudou aqui", sem diff de payload. Os assinantes reagem
//! refazendo a consulta da lista — ninguém aplica mutação otimista local.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

// Nomes das tabelas que emitem eventos.
pub const TABLE_ITEMS: &str = "items";
pub const TABLE_VEHICLES: &str = "vehicles";
pub const TABLE_USERS: &str = "users";
pub const TABLE_INVENTORY: &str = "inventory";
pub const TABLE_SUBMISSIONS: &str = "submissions";
pub const TABLE_REQUESTS: &str = "requests";

/// Notificação de que uma tabela sofreu alguma mutação.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeEvent {
    pub table: String,
    pub timestamp: DateTime<Utc>,
}

/// Capacidade padrão do canal de broadcast.
const DEFAULT_CAPACITY: usize = 256;

/// Hub de publicação/assinatura do feed de mudanças.
///
/// Um assinante lento que estourar o buffer observa `RecvError::Lagged` e
/// apenas perde eventos antigos; como todo evento dispara um re-fetch
/// completo, perder eventos intermediários não deixa o assinante errado.
pub struct ChangeFeed {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publica "algo mudou" para a tabela dada.
    pub fn publish(&self, table: &str) {
        let event = ChangeEvent {
            table: table.to_string(),
            timestamp: Utc::now(),
        };
        // Ignora o SendError — só significa que não há nenhum assinante.
        let _ = self.sender.send(event);
    }

    /// Assina todos os eventos publicados neste feed.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let feed = ChangeFeed::default();
        let mut rx = feed.subscribe();

        feed.publish(TABLE_ITEMS);

        let received = rx.recv().await.expect("deveria receber o evento");
        assert_eq!(received.table, "items");
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let feed = ChangeFeed::default();
        let mut rx1 = feed.subscribe();
        let mut rx2 = feed.subscribe();

        feed.publish(TABLE_SUBMISSIONS);

        assert_eq!(rx1.recv().await.unwrap().table, "submissions");
        assert_eq!(rx2.recv().await.unwrap().table, "submissions");
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let feed = ChangeFeed::default();
        feed.publish(TABLE_VEHICLES);
    }

    #[tokio::test]
    async fn event_serializes_table_name() {
        let feed = ChangeFeed::default();
        let mut rx = feed.subscribe();
        feed.publish(TABLE_REQUESTS);

        let event = rx.recv().await.unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["table"], "requests");
        assert!(json.get("timestamp").is_some());
    }
}
