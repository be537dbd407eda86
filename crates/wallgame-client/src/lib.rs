//! Transport session for the wall game room client
//!
//! Owns the WebSocket to the room server and the reconnect policy. Protocol
//! decisions stay in `wallgame-app`: this crate only moves decoded
//! [`wallgame_proto::ServerMessage`]s in and encoded
//! [`wallgame_proto::ClientMessage`]s out.
//!
//! # Components
//!
//! - [`socket_url`]: room page URL to socket URL
//! - [`Backoff`]: sans-IO exponential backoff between attempts
//! - [`TransportSession`]: handle to the session task and its event stream

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod endpoint;
mod reconnect;
mod transport;

pub use endpoint::socket_url;
pub use reconnect::{Backoff, ReconnectConfig};
pub use transport::{NORMAL_CLOSURE, SessionEvent, TransportError, TransportSession};
