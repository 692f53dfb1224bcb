use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;

use crate::config::AppState;

#[derive(Debug, Deserialize)]
pub struct RealtimeParams {
    // Tabela a assinar; ausente = todas.
    pub table: Option<String>,
}

// Sobe a conexão para WebSocket e prende nela uma assinatura do feed.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<RealtimeParams>,
    State(app_state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state, params.table))
}

// Gerencia uma conexão após o upgrade: encaminha cada evento do feed como
// um frame JSON e derruba a assinatura quando o cliente desconectar.
async fn handle_socket(socket: WebSocket, app_state: AppState, table_filter: Option<String>) {
    tracing::debug!(table = ?table_filter, "Assinante do feed de mudanças conectado");

    let mut rx = app_state.change_feed.subscribe();
    let (mut sink, mut stream) = socket.split();

    // Task de saída: feed -> WebSocket.
    let send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    if let Some(filter) = &table_filter {
                        if *filter != event.table {
                            continue;
                        }
                    }
                    let Ok(text) = serde_json::to_string(&event) else {
                        continue;
                    };
                    if sink.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                // Assinante lento só perde eventos antigos; o cliente
                // refaz a consulta completa a cada evento, então segue.
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Loop de entrada: só nos interessa o encerramento.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => {}
        }
    }

    // A assinatura morre junto com a conexão — nada de handlers acumulando
    // entre visitas repetidas à mesma tela.
    send_task.abort();
    tracing::debug!("Assinante do feed de mudanças desconectado");
}
