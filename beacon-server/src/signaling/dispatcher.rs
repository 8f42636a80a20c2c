use crate::AppState;
use axum::extract::ws::Utf8Bytes;
use beacon_core::{ClientMessage, ServerMessage, SessionId};
use tracing::{debug, warn};

/// Route one inbound text frame. Any failure turns into an `error`
/// message on the sender's own socket; nothing here ever closes the
/// connection.
pub fn dispatch(state: &AppState, session_id: SessionId, frame: &Utf8Bytes) {
    let msg = match ClientMessage::parse(frame.as_str()) {
        Ok(msg) => msg,
        Err(e) => {
            warn!("Rejecting frame from {}: {}", session_id, e);
            state.registry.send(
                session_id,
                &ServerMessage::Error {
                    message: e.to_string(),
                },
            );
            return;
        }
    };

    match msg {
        ClientMessage::Join { room_id, username } => {
            if let Err(e) = state.rooms.join(session_id, &room_id, &username) {
                warn!("Join refused for {} in room {}: {}", username, room_id, e);
                state.registry.send(
                    session_id,
                    &ServerMessage::Error {
                        message: e.to_string(),
                    },
                );
            }
        }
        ClientMessage::Signal { room_id, kind } => {
            debug!("Relaying {:?} from {} in room {}", kind, session_id, room_id);
            state.rooms.relay(session_id, &room_id, frame.clone());
        }
    }
}
