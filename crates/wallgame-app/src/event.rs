//! Application input events.
//!
//! This module defines [`AppEvent`], the complete set of inputs that drive
//! the [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - The transport session: connection lifecycle and decoded server messages.
//! - User interaction with the board and the restart dialog.

use std::time::Duration;

use wallgame_proto::{Position, ServerMessage, WallDirection};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A connection attempt started. Attempt 0 is the initial connect.
    Connecting {
        /// Consecutive failed attempts before this one.
        attempt: u32,
    },

    /// The socket is open.
    Connected,

    /// The socket closed.
    Disconnected {
        /// Close code, if the peer sent one.
        code: Option<u16>,
        /// True for a normal closure, which is never retried.
        intentional: bool,
    },

    /// The session will retry after a delay.
    Reconnecting {
        /// Number of the upcoming attempt.
        attempt: u32,
        /// Backoff before the attempt.
        delay: Duration,
    },

    /// The session ended and will not reconnect.
    Terminated,

    /// Decoded message from the server.
    Server(ServerMessage),

    /// User clicked a board cell.
    CellClicked(Position),

    /// User clicked a wall-placement affordance on the chosen cell.
    WallClicked(WallDirection),

    /// User answered the restart dialog.
    VoteClicked(bool),

    /// User asked to leave the room.
    Quit,
}
