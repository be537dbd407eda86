//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. The room socket is a
//! [`TransportSession`].

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use wallgame_app::{App, AppEvent, Driver};
use wallgame_client::{ReconnectConfig, SessionEvent, TransportError, TransportSession};
use wallgame_proto::ClientMessage;

use crate::{DialogPresenter, InputState, KeyInput, KeyOutcome, ui};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui) and the room socket.
/// Owns the board cursor and the dialog presenter.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    session: Option<TransportSession>,
    reconnect: ReconnectConfig,
    input_state: InputState,
    dialog: DialogPresenter,
}

impl TerminalDriver {
    /// Take over the terminal.
    pub fn new(reconnect: ReconnectConfig) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            event_stream: EventStream::new(),
            session: None,
            reconnect,
            input_state: InputState::new(),
            dialog: DialogPresenter::new(),
        })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            _ => None,
        }
    }
}

/// Translate a transport event into a controller event.
pub fn session_event(event: SessionEvent) -> AppEvent {
    match event {
        SessionEvent::Connecting { attempt } => AppEvent::Connecting { attempt },
        SessionEvent::Open { .. } => AppEvent::Connected,
        SessionEvent::Message { message, .. } => AppEvent::Server(message),
        SessionEvent::Closed { code, intentional, .. } => AppEvent::Disconnected { code, intentional },
        SessionEvent::Reconnecting { attempt, delay } => AppEvent::Reconnecting { attempt, delay },
        SessionEvent::Terminated => AppEvent::Terminated,
    }
}

/// Next event of the session, or never if there is none.
async fn next_session_event(session: &mut Option<TransportSession>) -> Option<SessionEvent> {
    match session {
        Some(session) => session.next_event().await,
        None => std::future::pending().await,
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn next_event(&mut self, app: &App) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            tokio::select! {
                biased;

                // Terminal events
                maybe_event = self.event_stream.next() => match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        let Some(key) = Self::convert_key(key_event.code) else {
                            continue;
                        };
                        match self.input_state.handle_key(key, app) {
                            KeyOutcome::Event(event) => return Ok(Some(event)),
                            KeyOutcome::Redraw => self.render(app)?,
                            KeyOutcome::Ignored => {},
                        }
                    },
                    Some(Ok(Event::Resize(..))) => self.render(app)?,
                    Some(Ok(_)) => {},
                    Some(Err(e)) => return Err(TerminalError::Io(e)),
                    None => return Ok(None),
                },

                // Socket events
                maybe_event = next_session_event(&mut self.session) => match maybe_event {
                    Some(event) => return Ok(Some(session_event(event))),
                    None => {
                        tracing::debug!("session task ended");
                        self.session = None;
                    },
                },
            }
        }
    }

    async fn send(&mut self, message: ClientMessage) -> Result<(), Self::Error> {
        let session = self.session.as_ref().ok_or(TransportError::NotConnected)?;
        session.send(&message)?;
        Ok(())
    }

    async fn connect(&mut self, url: &str) -> Result<(), Self::Error> {
        let session = TransportSession::connect(url, self.reconnect)?;
        if let Some(previous) = self.session.replace(session) {
            previous.stop();
        }
        Ok(())
    }

    async fn disconnect(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close().await;
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.dialog.sync(app);
        self.terminal.draw(|frame| {
            ui::render(frame, app, &self.input_state, self.dialog.current());
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            session.stop();
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wallgame_proto::ServerMessage;

    use super::*;

    #[test]
    fn session_events_map_to_app_events() {
        assert_eq!(session_event(SessionEvent::Open { generation: 3 }), AppEvent::Connected);
        assert_eq!(
            session_event(SessionEvent::Message { generation: 3, message: ServerMessage::GameStart }),
            AppEvent::Server(ServerMessage::GameStart)
        );
        assert_eq!(
            session_event(SessionEvent::Closed { generation: 3, code: None, intentional: false }),
            AppEvent::Disconnected { code: None, intentional: false }
        );
        assert_eq!(
            session_event(SessionEvent::Reconnecting {
                attempt: 2,
                delay: Duration::from_millis(500)
            }),
            AppEvent::Reconnecting { attempt: 2, delay: Duration::from_millis(500) }
        );
    }
}
