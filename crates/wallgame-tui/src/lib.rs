//! Terminal UI for the wall game room client
//!
//! A thin shell over [`wallgame_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`wallgame_app::Runtime`].
//!
//! This crate only maps keys to board events, owns the socket session, and
//! draws frames.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dialog;
pub mod input;
pub mod terminal;
pub mod ui;

pub use dialog::{Dialog, DialogButton, DialogPresenter};
pub use input::{InputState, KeyInput, KeyOutcome};
pub use terminal::{TerminalDriver, TerminalError};
pub use wallgame_app::{App, AppAction, AppEvent, Driver, Runtime};
