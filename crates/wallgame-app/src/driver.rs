//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the room runtime from a specific socket and
//! a specific screen. The terminal frontend implements it over a WebSocket
//! session and crossterm; tests implement it with a scripted event list.

use std::future::Future;

use wallgame_proto::ClientMessage;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the room runtime.
///
/// Implementations own the transport session and the input source. The
/// generic [`Runtime`](crate::Runtime) owns the [`App`] and decides what
/// happens with every event.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// `app` is the current state, so a driver can map raw input (a key press
    /// on a cursor) to a board event. Returns `None` once the driver has no
    /// more input, which ends the loop.
    fn next_event(
        &mut self,
        app: &App,
    ) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Hand a message to the transport session.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is open.
    fn send(&mut self, message: ClientMessage)
    -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Open the transport session for `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be used at all. Connection failures
    /// are reported later as events, since the session retries on its own.
    fn connect(&mut self, url: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Close the transport session with a normal closure.
    fn disconnect(&mut self) -> impl Future<Output = ()> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release resources. Called once when the loop ends.
    fn stop(&mut self);
}
