use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Position-assigned role inside a room: the first member of a fresh room
/// is the caller, whoever joins a room that already has a member answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Caller,
    Callee,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Caller => write!(f, "caller"),
            Role::Callee => write!(f, "callee"),
        }
    }
}

/// The three negotiation message kinds the relay forwards without looking
/// inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Offer,
    Answer,
    Ice,
}

/// A validated inbound message. Everything a client can legally send
/// collapses into one of these two shapes; the opaque fields of a signal
/// (`payload`, `to`, ...) stay in the original frame, which is what gets
/// relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    Join { room_id: String, username: String },
    Signal { room_id: String, kind: SignalKind },
}

/// Why an inbound frame was refused. The `Display` strings are the wire
/// protocol: they are sent to the client verbatim inside an `error`
/// message, so they must not drift.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Malformed message: {0}")]
    Malformed(String),
    #[error("Missing required fields: type or roomId")]
    MissingEnvelope,
    #[error("Missing required field: from")]
    MissingFrom,
    #[error("Unknown message type: {0}")]
    UnknownType(String),
}

/// Loose envelope used to pull the routing fields out of a frame before
/// any of them are known to be present. Unknown fields are deliberately
/// ignored so they survive the relay untouched.
#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(rename = "roomId")]
    room_id: Option<String>,
    from: Option<String>,
}

impl ClientMessage {
    /// Parse and validate one inbound text frame.
    ///
    /// Field checks run in the order the protocol promises its error
    /// messages: well-formedness, then `type`/`roomId`, then `from` for a
    /// join, then the message type itself.
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        let raw: RawMessage =
            serde_json::from_str(text).map_err(|e| ProtocolError::Malformed(e.to_string()))?;

        let (kind, room_id) = match (raw.kind, raw.room_id) {
            (Some(kind), Some(room_id)) => (kind, room_id),
            _ => return Err(ProtocolError::MissingEnvelope),
        };

        match kind.as_str() {
            "join" => match raw.from {
                Some(username) => Ok(ClientMessage::Join { room_id, username }),
                None => Err(ProtocolError::MissingFrom),
            },
            "offer" => Ok(ClientMessage::Signal {
                room_id,
                kind: SignalKind::Offer,
            }),
            "answer" => Ok(ClientMessage::Signal {
                room_id,
                kind: SignalKind::Answer,
            }),
            "ice" => Ok(ClientMessage::Signal {
                room_id,
                kind: SignalKind::Ice,
            }),
            other => Err(ProtocolError::UnknownType(other.to_owned())),
        }
    }
}

/// Every message the relay itself emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    /// Join acknowledgement, sent to the joiner before anything else so it
    /// learns its role before hearing about anyone else.
    Joined { role: Role, users: Vec<String> },
    /// Current usernames of a room, broadcast to every member after each
    /// successful join.
    UserList { users: Vec<String> },
    PeerJoined {
        #[serde(rename = "roomId")]
        room_id: String,
    },
    PeerLeft {
        #[serde(rename = "roomId")]
        room_id: String,
    },
    Error { message: String },
}
