//! JSON-encoded protocol messages.
//!
//! Server messages are internally tagged by an `event` field. Client messages
//! carry no tag at all: the server tells an action from a vote by the fields
//! present, so [`ClientMessage`] is serialized untagged.
//!
//! # Invariants
//!
//! - Unknown `event` values decode to [`ServerMessage::Unknown`] rather than an
//!   error, so a newer server never breaks an older client.
//! - Decoding never panics. Malformed input yields
//!   [`ProtocolError::JsonDecode`].

pub mod client;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::errors::{ProtocolError, Result};

/// Events pushed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Fatal error for this session.
    Error(server::ErrorPayload),
    /// Local player seated.
    Joined(server::Joined),
    /// Resync point after an abnormal closure.
    Reconnected(server::Reconnected),
    /// Another player took a seat.
    NewPlayer(server::PlayerNotice),
    /// All seats filled; the game begins.
    GameStart,
    /// Full board snapshot.
    UpdateGameMap(server::GameMap),
    /// Game finished with final scores.
    GameOver(server::GameOver),
    /// A player was eliminated.
    PlayerOut(server::PlayerOut),
    /// The local player must act.
    AskPlayerAction(server::AskPlayerAction),
    /// The server collects restart votes.
    AskRestarting,
    /// Any event this client does not know about.
    #[serde(other)]
    Unknown,
}

impl ServerMessage {
    /// Decode one text frame.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ProtocolError::JsonDecode(e.to_string()))
    }

    /// Encode to a text frame.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ProtocolError::JsonEncode(e.to_string()))
    }

    /// Wire name of the event, for diagnostics.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Error(_) => "error",
            Self::Joined(_) => "joined",
            Self::Reconnected(_) => "reconnected",
            Self::NewPlayer(_) => "new_player",
            Self::GameStart => "game_start",
            Self::UpdateGameMap(_) => "update_game_map",
            Self::GameOver(_) => "game_over",
            Self::PlayerOut(_) => "player_out",
            Self::AskPlayerAction(_) => "ask_player_action",
            Self::AskRestarting => "ask_restarting",
            Self::Unknown => "unknown",
        }
    }
}

/// Messages sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientMessage {
    /// Move and wall placement.
    Action(client::PlayerAction),
    /// Restart vote.
    Vote(client::RestartAnswer),
}

impl ClientMessage {
    /// Encode to a text frame.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ProtocolError::JsonEncode(e.to_string()))
    }

    /// Decode one text frame.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ProtocolError::JsonDecode(e.to_string()))
    }
}
