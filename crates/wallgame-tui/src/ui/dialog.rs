//! Modal dialog
//!
//! Draws the open [`Dialog`] centered over the rest of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::Dialog;

const PADDING: u16 = 4;

/// Render a dialog on top of `area`.
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, dialog: &Dialog, area: Rect) {
    let mut lines: Vec<Line> = dialog.content.iter().map(|l| Line::from(l.as_str())).collect();
    lines.push(Line::default());

    let mut buttons = Vec::new();
    for button in &dialog.buttons {
        buttons.push(Span::styled(
            format!("[{}] {}", button.key, button.label),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        buttons.push(Span::raw("  "));
    }
    buttons.pop();
    lines.push(Line::from(buttons));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = (content_width.max(dialog.title.len() + 2) as u16 + PADDING).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let block = Block::default().borders(Borders::ALL).title(format!(" {} ", dialog.title));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block).centered(), popup);
}
