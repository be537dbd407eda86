//! Notification log
//!
//! Shows the most recent status lines, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};
use wallgame_app::App;

const BORDER_SIZE: u16 = 2;

/// Render the notification log.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Log ");

    let items: Vec<ListItem> = app
        .log()
        .lines()
        .iter()
        .flat_map(|entry| entry.lines())
        .map(|line| ListItem::new(Line::from(line.to_string())))
        .collect();

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
