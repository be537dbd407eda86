//! Application layer for the wall game room client
//!
//! Pure state machines and a generic runtime for the room page: the same code
//! drives the terminal frontend and the deterministic tests.
//!
//! # Components
//!
//! - [`App`]: room controller (session state, event dispatch, vote latch)
//! - [`MoveSelector`]: two-step destination and wall selection
//! - [`BoardView`]: pure projection of grid and selection into cells
//! - [`NotificationLog`]: append-only feed of status lines
//! - [`Driver`]: trait for platform-specific I/O
//! - [`Runtime`]: generic event loop using a Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
pub mod board;
mod config;
mod driver;
mod event;
mod log;
mod runtime;
pub mod scoreboard;
mod selector;
mod state;
mod vote;

pub use action::AppAction;
pub use app::App;
pub use board::{BoardView, CellView, CellWalls, GridState};
pub use config::{ConfigError, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, RoomConfig};
pub use driver::Driver;
pub use event::AppEvent;
pub use log::NotificationLog;
pub use runtime::Runtime;
pub use scoreboard::{RankedScore, ScoreEntry};
pub use selector::{CellClick, MoveSelector, SelectionPhase, SelectionState};
pub use state::{ConnectionState, RoomSession};
pub use vote::RestartVote;
pub use wallgame_proto::{PlayerId, Position, RoomStatus, WallDirection};
