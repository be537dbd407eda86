//! Wall game wire protocol
//!
//! JSON messages exchanged with the room server over a message-oriented
//! socket. The server pushes events tagged by an `event` field
//! ([`ServerMessage`]); the client answers with untagged objects
//! ([`ClientMessage`]).
//!
//! The client never interprets game rules. Everything here is plain data: the
//! controller in `wallgame-app` decides what each event means.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod errors;
pub mod payloads;
mod types;

pub use errors::{ProtocolError, Result};
pub use payloads::{ClientMessage, ServerMessage};
pub use types::{Motion, Occupant, PlayerId, Position, RoomStatus, WallDirection, WallMatrix};
