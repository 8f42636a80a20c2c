use axum::extract::ws::{Message, Utf8Bytes};
use beacon_core::{ServerMessage, SessionId};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

struct RegistryInner {
    connections: DashMap<SessionId, mpsc::UnboundedSender<Message>>,
}

/// Send queues for every open WebSocket, keyed by session. A send here is
/// a non-blocking enqueue; the connection's writer task drains the queue
/// onto the socket.
#[derive(Clone)]
pub struct ConnectionRegistry {
    inner: Arc<RegistryInner>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                connections: DashMap::new(),
            }),
        }
    }

    pub fn register(&self, session_id: SessionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(session_id, tx);
    }

    pub fn unregister(&self, session_id: &SessionId) {
        self.inner.connections.remove(session_id);
    }

    /// Whether frames queued for this session can still reach a socket.
    pub fn is_open(&self, session_id: &SessionId) -> bool {
        self.inner
            .connections
            .get(session_id)
            .is_some_and(|conn| !conn.is_closed())
    }

    /// Serialize and queue a server message for one session.
    pub fn send(&self, session_id: SessionId, msg: &ServerMessage) {
        if let Some(conn) = self.inner.connections.get(&session_id) {
            match serde_json::to_string(msg) {
                Ok(json) => {
                    if let Err(e) = conn.send(Message::Text(json.into())) {
                        error!("Failed to send WS message to {}: {:?}", session_id, e);
                    }
                }
                Err(e) => error!("Failed to serialize server message: {}", e),
            }
        } else {
            warn!("Attempted to send to disconnected session {}", session_id);
        }
    }

    /// Queue an already-encoded frame for one session. The relay path uses
    /// this to forward the original client frame byte for byte.
    pub fn forward(&self, session_id: SessionId, frame: Utf8Bytes) {
        if let Some(conn) = self.inner.connections.get(&session_id) {
            if let Err(e) = conn.send(Message::Text(frame)) {
                error!("Failed to forward WS message to {}: {:?}", session_id, e);
            }
        } else {
            warn!("Attempted to forward to disconnected session {}", session_id);
        }
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
