//! Status bar
//!
//! Displays connection state, room status, the local symbol and a hint for
//! the current selection step.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use wallgame_app::{App, ConnectionState, RoomStatus, SelectionPhase};

use crate::input::wall_key;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection = match app.connection_state() {
        ConnectionState::Connecting => {
            Span::styled("Connecting...", Style::default().fg(Color::Yellow))
        },
        ConnectionState::Open => Span::styled(
            "Connected",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ConnectionState::Disconnected => {
            Span::styled("Disconnected", Style::default().fg(Color::Red))
        },
        ConnectionState::Reconnecting { attempt } => Span::styled(
            format!("Reconnecting (attempt {attempt})..."),
            Style::default().fg(Color::Yellow),
        ),
    };

    let room = match app.room_status() {
        RoomStatus::Waiting => "waiting for players",
        RoomStatus::Running => "running",
        RoomStatus::Finished => "finished",
    };
    let player = app.local_player().map_or_else(String::new, |p| format!(" | You: {p}"));

    let line = Line::from(vec![
        Span::raw(" "),
        connection,
        Span::raw(format!(" | Room {room}{player}")),
        Span::styled(hint(app), Style::default().add_modifier(Modifier::BOLD)),
    ]);

    let paragraph =
        Paragraph::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(paragraph, area);
}

fn hint(app: &App) -> String {
    if app.restart_prompt().is_some() {
        return " | Play again? y/n".to_string();
    }
    match app.selection().phase() {
        SelectionPhase::Idle => String::new(),
        SelectionPhase::AwaitingDestination => " | Your turn: pick a cell (arrows, Enter)".into(),
        SelectionPhase::DestinationChosen => {
            let keys: Vec<String> = app
                .selection()
                .wall_options()
                .iter()
                .map(|&dir| format!("{}={dir}", wall_key(dir)))
                .collect();
            format!(" | Place a wall: {}", keys.join(" "))
        },
    }
}
