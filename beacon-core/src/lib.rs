pub mod model;

pub use model::{ClientMessage, ProtocolError, Role, ServerMessage, SessionId, SignalKind};
