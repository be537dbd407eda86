//! Payloads sent by the client.

use serde::{Deserialize, Serialize};

use crate::{Motion, WallDirection};

/// Move plus wall placement for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerAction {
    /// Relative move from the current cell.
    pub motions: Motion,
    /// Edge of the destination cell on which to place a wall.
    pub wall_dir: WallDirection,
}

/// Answer to a restart vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestartAnswer {
    /// True to play again.
    pub agree: bool,
}
