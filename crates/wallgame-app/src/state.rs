//! Observable session state types.
//!
//! These structures are the view model of the room page: the part of session
//! state a frontend needs for its status line.

use wallgame_proto::{PlayerId, RoomStatus};

/// Connection state, mutated only by transport session events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Initial connection in progress.
    Connecting,
    /// Socket open.
    Open,
    /// Socket closed; a retry may follow.
    Disconnected,
    /// Retrying after an abnormal closure.
    Reconnecting {
        /// Number of the current attempt.
        attempt: u32,
    },
}

/// Per-room session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSession {
    /// Transport overlay.
    pub connection: ConnectionState,
    /// Room lifecycle as reported by the server.
    pub status: RoomStatus,
    /// Symbol of the local player. `None` until joined.
    pub local_player: Option<PlayerId>,
    /// Grid dimension, fixed for the session lifetime.
    pub board_size: usize,
}

impl RoomSession {
    /// Fresh session for a room of the given size.
    pub fn new(board_size: usize) -> Self {
        Self {
            connection: ConnectionState::Connecting,
            status: RoomStatus::Waiting,
            local_player: None,
            board_size,
        }
    }

    /// True if `player` is the local player.
    pub fn is_local(&self, player: &str) -> bool {
        self.local_player.as_deref() == Some(player)
    }
}
