//! Payloads pushed by the server.

use serde::{Deserialize, Serialize};

use crate::{Occupant, PlayerId, Position, RoomStatus, WallMatrix};

/// Fatal protocol error reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable reason.
    pub message: String,
}

/// The local player was seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joined {
    /// Symbol assigned to the local player.
    #[serde(default)]
    pub player: PlayerId,
    /// Older servers report a full room as `successful: false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successful: Option<bool>,
}

impl Joined {
    /// False only when the server explicitly refused the seat.
    pub fn is_successful(&self) -> bool {
        self.successful != Some(false)
    }
}

/// Authoritative session state after a reconnect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconnected {
    /// Symbol of the local player.
    pub player: PlayerId,
    /// Current cell of the local player.
    pub pos: Position,
    /// Room status at the time of the reconnect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
}

/// Notification about another seat in the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNotice {
    /// Symbol of the player concerned.
    pub player: PlayerId,
}

/// Full board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    /// Horizontal walls: `wall_top[i][j]` is the wall above cell (i, j).
    pub wall_top: WallMatrix,
    /// Vertical walls: `wall_left[i][j]` is the wall left of cell (i, j).
    pub wall_left: WallMatrix,
    /// Occupied cells.
    pub players_info: Vec<Occupant>,
}

/// Final scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    /// `(player, score)` pairs, sorted by descending score.
    pub result: Vec<(PlayerId, i64)>,
}

/// A player was eliminated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOut {
    /// Symbol of the eliminated player.
    pub player: PlayerId,
    /// Final area of the eliminated player, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

/// The server wants a move from the local player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskPlayerAction {
    /// Cells the player may move to.
    pub reachable_points: Vec<Position>,
    /// Reason for a re-prompt. Empty or absent on a normal turn.
    #[serde(default, alias = "msg", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AskPlayerAction {
    /// Re-prompt reason, if the previous action was rejected.
    pub fn retry_reason(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}
