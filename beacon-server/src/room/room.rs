use beacon_core::{Role, SessionId};
use thiserror::Error;

/// A room pairs exactly two peers.
pub const ROOM_CAPACITY: usize = 2;

/// One member of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub session_id: SessionId,
    pub username: String,
    pub role: Role,
}

/// Why a join was refused. The `Display` strings go back to the client
/// verbatim inside an `error` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinReject {
    #[error("User already exists")]
    DuplicateUsername,
    #[error("Room already exists and is Full")]
    RoomFull,
    #[error("Already in a room")]
    AlreadyJoined,
}

/// Membership of a single room, in join order.
#[derive(Debug, Default)]
pub struct Room {
    members: Vec<Participant>,
}

impl Room {
    /// Admit a session under `username` if the room rules allow it. The
    /// duplicate-name check runs before the capacity check, so a name
    /// clash against a full room reports the clash.
    pub fn try_join(
        &mut self,
        session_id: SessionId,
        username: &str,
    ) -> Result<Participant, JoinReject> {
        if self.members.iter().any(|m| m.username == username) {
            return Err(JoinReject::DuplicateUsername);
        }
        if self.members.len() >= ROOM_CAPACITY {
            return Err(JoinReject::RoomFull);
        }

        let role = if self.members.is_empty() {
            Role::Caller
        } else {
            Role::Callee
        };
        let participant = Participant {
            session_id,
            username: username.to_owned(),
            role,
        };
        self.members.push(participant.clone());
        Ok(participant)
    }

    /// Drop a member by session, returning it if it was present.
    pub fn remove(&mut self, session_id: SessionId) -> Option<Participant> {
        let idx = self
            .members
            .iter()
            .position(|m| m.session_id == session_id)?;
        Some(self.members.remove(idx))
    }

    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    pub fn usernames(&self) -> Vec<String> {
        self.members.iter().map(|m| m.username.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
