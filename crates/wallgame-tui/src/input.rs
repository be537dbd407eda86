//! Input state and key handling for the TUI.
//!
//! The board is driven from the keyboard: a cursor stands in for the mouse.
//! Cursor movement is local to the frontend; everything else becomes an
//! [`AppEvent`] for the controller.

use wallgame_app::{App, AppEvent, Position, WallDirection};

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Forward to the controller.
    Event(AppEvent),
    /// Only the cursor moved; redraw.
    Redraw,
    /// Nothing to do.
    Ignored,
}

/// Key bound to each wall affordance, in the same order as
/// [`WallDirection::ALL`].
pub const WALL_KEYS: [(char, WallDirection); 4] = [
    ('j', WallDirection::Left),
    ('l', WallDirection::Right),
    ('i', WallDirection::Top),
    ('k', WallDirection::Bottom),
];

/// Key that places a wall on the given edge.
pub fn wall_key(dir: WallDirection) -> char {
    WALL_KEYS.iter().find(|(_, d)| *d == dir).map_or('?', |(key, _)| *key)
}

/// Input state for the TUI.
///
/// Owns the board cursor.
#[derive(Debug, Default)]
pub struct InputState {
    cursor: Position,
}

impl InputState {
    /// Cursor in the top-left corner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handle a key input event.
    pub fn handle_key(&mut self, key: KeyInput, app: &App) -> KeyOutcome {
        let last = app.board_size().saturating_sub(1);
        let Position { row, col } = self.cursor;

        let moved = match key {
            KeyInput::Up => Position::new(row.saturating_sub(1), col),
            KeyInput::Down => Position::new((row + 1).min(last), col),
            KeyInput::Left => Position::new(row, col.saturating_sub(1)),
            KeyInput::Right => Position::new(row, (col + 1).min(last)),
            KeyInput::Enter | KeyInput::Char(' ') => {
                return KeyOutcome::Event(AppEvent::CellClicked(self.cursor));
            },
            KeyInput::Esc | KeyInput::Char('q') => return KeyOutcome::Event(AppEvent::Quit),
            KeyInput::Char('y') if app.restart_prompt().is_some() => {
                return KeyOutcome::Event(AppEvent::VoteClicked(true));
            },
            KeyInput::Char('n') if app.restart_prompt().is_some() => {
                return KeyOutcome::Event(AppEvent::VoteClicked(false));
            },
            KeyInput::Char(c) => {
                return WALL_KEYS
                    .iter()
                    .find(|(key, _)| *key == c)
                    .map_or(KeyOutcome::Ignored, |(_, dir)| {
                        KeyOutcome::Event(AppEvent::WallClicked(*dir))
                    });
            },
        };

        if moved == self.cursor {
            return KeyOutcome::Ignored;
        }
        self.cursor = moved;
        KeyOutcome::Redraw
    }
}
