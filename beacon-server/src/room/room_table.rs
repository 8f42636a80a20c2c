use crate::registry::ConnectionRegistry;
use crate::room::{JoinReject, Room};
use axum::extract::ws::Utf8Bytes;
use beacon_core::{ServerMessage, SessionId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::{debug, info};

struct TableInner {
    rooms: DashMap<String, Room>,
    /// Which room each session sits in, so a disconnect does not have to
    /// scan every room.
    membership: DashMap<SessionId, String>,
}

/// All live rooms.
///
/// A room's map entry guard doubles as its lock: join, leave and relay
/// each run their checks, their mutation and their notification enqueues
/// while holding it, so the sequence of membership events per room is
/// total. Sends never block (the registry queues onto unbounded
/// channels), which makes holding the guard across them safe.
#[derive(Clone)]
pub struct RoomTable {
    inner: Arc<TableInner>,
    registry: ConnectionRegistry,
}

impl RoomTable {
    pub fn new(registry: ConnectionRegistry) -> Self {
        Self {
            inner: Arc::new(TableInner {
                rooms: DashMap::new(),
                membership: DashMap::new(),
            }),
            registry,
        }
    }

    /// Admit `session_id` to `room_id`, creating the room on first use,
    /// and notify the joiner and any present peer.
    pub fn join(
        &self,
        session_id: SessionId,
        room_id: &str,
        username: &str,
    ) -> Result<(), JoinReject> {
        // A join from a session whose cleanup already ran must not be
        // admitted: no disconnect would ever remove it again.
        if !self.registry.is_open(&session_id) {
            debug!("Dropping join from closed session {}", session_id);
            return Ok(());
        }
        if self.inner.membership.contains_key(&session_id) {
            return Err(JoinReject::AlreadyJoined);
        }

        let mut room = match self.inner.rooms.entry(room_id.to_owned()) {
            Entry::Occupied(e) => e.into_ref(),
            Entry::Vacant(e) => {
                info!("Creating new room: {}", room_id);
                e.insert(Room::default())
            }
        };

        let joiner = room.try_join(session_id, username)?;
        self.inner.membership.insert(session_id, room_id.to_owned());

        info!(
            "User {} joined room {} as {:?}",
            username, room_id, joiner.role
        );

        // The joiner hears its own admission first, then everyone gets the
        // fresh user list, then the peer learns someone arrived.
        let users = room.usernames();
        self.registry.send(
            session_id,
            &ServerMessage::Joined {
                role: joiner.role,
                users: users.clone(),
            },
        );
        for member in room.members() {
            self.registry.send(
                member.session_id,
                &ServerMessage::UserList {
                    users: users.clone(),
                },
            );
        }
        for member in room.members() {
            if member.session_id != session_id {
                self.registry.send(
                    member.session_id,
                    &ServerMessage::PeerJoined {
                        room_id: room_id.to_owned(),
                    },
                );
            }
        }

        Ok(())
    }

    /// Forward a signaling frame to every member of `room_id` except the
    /// sender. Frames for rooms that do not exist are dropped quietly.
    pub fn relay(&self, sender: SessionId, room_id: &str, frame: Utf8Bytes) {
        let Some(room) = self.inner.rooms.get(room_id) else {
            debug!("Dropping signal for unknown room {}", room_id);
            return;
        };

        for member in room.members() {
            if member.session_id != sender {
                self.registry.forward(member.session_id, frame.clone());
            }
        }
    }

    /// Remove whatever membership `session_id` holds, tell the remaining
    /// peer it left, and drop the room once it empties. Runs when the
    /// socket goes away.
    ///
    /// The membership entry comes out before the room locks; join takes
    /// the locks in the opposite roles but never holds membership while
    /// waiting on a room, so the two paths cannot deadlock.
    pub fn disconnect(&self, session_id: SessionId) {
        let Some((_, room_id)) = self.inner.membership.remove(&session_id) else {
            return;
        };

        if let Entry::Occupied(mut e) = self.inner.rooms.entry(room_id.clone()) {
            if let Some(left) = e.get_mut().remove(session_id) {
                info!("User {} left room {}", left.username, room_id);
                for member in e.get().members() {
                    self.registry.send(
                        member.session_id,
                        &ServerMessage::PeerLeft {
                            room_id: room_id.clone(),
                        },
                    );
                }
            }

            if e.get().is_empty() {
                info!("Removing empty room: {}", room_id);
                e.remove();
            }
        }
    }

    /// Usernames currently in `room_id`, if the room exists.
    pub fn users(&self, room_id: &str) -> Option<Vec<String>> {
        self.inner.rooms.get(room_id).map(|r| r.usernames())
    }

    pub fn room_count(&self) -> usize {
        self.inner.rooms.len()
    }

    /// How many sessions currently sit in some room.
    pub fn session_count(&self) -> usize {
        self.inner.membership.len()
    }
}
