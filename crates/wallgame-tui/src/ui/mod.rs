//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

pub mod board;
mod dialog;
mod log;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use wallgame_app::App;

use crate::{Dialog, InputState};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, input: &InputState, dialog: Option<&Dialog>) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_main_area(frame, app, input, *main_area);
    status::render(frame, app, *status_area);

    if let Some(dialog) = dialog {
        dialog::render(frame, dialog, frame.area());
    }
}

/// Render the main area (board + notification log).
fn render_main_area(frame: &mut Frame, app: &App, input: &InputState, area: Rect) {
    const LOG_AREA_MIN_WIDTH: u16 = 20;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(board::width(app.board_size())),
            Constraint::Min(LOG_AREA_MIN_WIDTH),
        ])
        .split(area);

    let [board_area, log_area] = chunks.as_ref() else {
        return;
    };

    board::render(frame, app, input.cursor(), *board_area);
    log::render(frame, app, *log_area);
}
