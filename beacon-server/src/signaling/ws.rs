use crate::AppState;
use crate::signaling::dispatch;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use beacon_core::SessionId;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::info;

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let session_id = SessionId::new();
    info!("New WebSocket connection: {}", session_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.registry.register(session_id, tx);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let state = state.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => dispatch(&state, session_id, &text),
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => {
            // The reader may be mid-dispatch on another worker; wait for it
            // to stop so no join lands after the room is reconciled. The
            // writer holds no room state, so the other branch can skip this.
            recv_task.abort();
            let _ = (&mut recv_task).await;
        }
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Leave the room before dropping the queue, whichever task died first.
    state.rooms.disconnect(session_id);
    state.registry.unregister(&session_id);
    info!("WebSocket disconnected: {}", session_id);
}
