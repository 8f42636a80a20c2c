mod message;
mod session;

pub use message::{ClientMessage, ProtocolError, Role, ServerMessage, SignalKind};
pub use session::SessionId;
