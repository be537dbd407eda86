//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use wallgame_proto::ClientMessage;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Leave the room page.
    Quit,

    /// Open the transport session.
    Connect {
        /// Socket URL of the room.
        url: String,
    },

    /// Hand a message to the transport session.
    Send(ClientMessage),

    /// Close the transport session intentionally.
    Disconnect,
}
