use std::fmt;
use uuid::Uuid;

/// Identifier the server assigns to a connection when it is accepted.
/// Session ids never travel on the wire; peers are addressed by username
/// inside a room.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
