//! Board
//!
//! Draws the grid from the [`BoardView`] projection. Corners are `+`, walls
//! are `---` and `|`. On the chosen cell, every open edge shows the key that
//! places a wall there.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use wallgame_app::{App, BoardView, CellView, Position, WallDirection};

use crate::input::wall_key;

const CELL_WIDTH: usize = 3;
const BORDER_SIZE: u16 = 2;
const CORNER: &str = "+";
const HORIZONTAL_WALL: &str = "---";
const VERTICAL_WALL: &str = "|";
const REACHABLE_MARKER: &str = "·";

/// Columns needed to draw a board of `size` cells, frame included.
pub fn width(size: usize) -> u16 {
    (size * (CELL_WIDTH + 1) + 1) as u16 + BORDER_SIZE
}

/// Render the board.
pub fn render(frame: &mut Frame, app: &App, cursor: Position, area: Rect) {
    let view = app.board_view();
    let title = format!(" Board {0}x{0} ", view.size());
    let block = Block::default().borders(Borders::ALL).title(title);

    let paragraph = Paragraph::new(lines(&view, cursor, app.local_player())).block(block);
    frame.render_widget(paragraph, area);
}

/// Text lines of the grid: one edge line above every row, one below the last.
pub fn lines(view: &BoardView, cursor: Position, local: Option<&str>) -> Vec<Line<'static>> {
    let size = view.size();
    let mut lines = Vec::with_capacity(2 * size + 1);
    for row in 0..size {
        lines.push(edge_line(view, row));
        lines.push(cell_line(view, row, cursor, local));
    }
    lines.push(edge_line(view, size));
    lines
}

/// Horizontal edge between row `row - 1` and row `row`.
fn edge_line(view: &BoardView, row: usize) -> Line<'static> {
    let wall_style = Style::default().fg(Color::White);
    let mut spans = Vec::new();

    for col in 0..view.size() {
        let above = row.checked_sub(1).and_then(|r| view.cell(Position::new(r, col)));
        let below = view.cell(Position::new(row, col));

        spans.push(Span::styled(CORNER, wall_style));
        let walled = below.is_some_and(|c| c.walls.top) || above.is_some_and(|c| c.walls.bottom);
        let marker = below
            .and_then(|c| affordance(c, WallDirection::Top))
            .or_else(|| above.and_then(|c| affordance(c, WallDirection::Bottom)));

        spans.push(match (walled, marker) {
            (true, _) => Span::styled(HORIZONTAL_WALL, wall_style),
            (false, Some(key)) => Span::styled(format!(" {key} "), affordance_style()),
            (false, None) => Span::raw(" ".repeat(CELL_WIDTH)),
        });
    }
    spans.push(Span::styled(CORNER, wall_style));
    Line::from(spans)
}

/// Cells of one row with the vertical edges between them.
fn cell_line(view: &BoardView, row: usize, cursor: Position, local: Option<&str>) -> Line<'static> {
    let cells = view.row(row);
    let mut spans = Vec::new();

    for (col, cell) in cells.iter().enumerate() {
        let left = col.checked_sub(1).and_then(|c| cells.get(c));
        spans.push(vertical_edge(left, Some(cell)));
        spans.push(cell_span(cell, cell.pos == cursor, local));
    }
    spans.push(vertical_edge(cells.last(), None));
    Line::from(spans)
}

/// Vertical edge between two horizontally adjacent cells.
fn vertical_edge(left: Option<&CellView>, right: Option<&CellView>) -> Span<'static> {
    let walled = left.is_some_and(|c| c.walls.right) || right.is_some_and(|c| c.walls.left);
    if walled {
        return Span::styled(VERTICAL_WALL, Style::default().fg(Color::White));
    }
    let marker = right
        .and_then(|c| affordance(c, WallDirection::Left))
        .or_else(|| left.and_then(|c| affordance(c, WallDirection::Right)));
    match marker {
        Some(key) => Span::styled(key.to_string(), affordance_style()),
        None => Span::raw(" "),
    }
}

/// Interior of one cell, `CELL_WIDTH` columns wide.
fn cell_span(cell: &CellView, is_cursor: bool, local: Option<&str>) -> Span<'static> {
    let symbol = cell.occupant.as_deref().unwrap_or(if cell.reachable { REACHABLE_MARKER } else { "" });
    let symbol_width = Span::raw(symbol).width();
    let padding = CELL_WIDTH.saturating_sub(1 + symbol_width);
    let text = format!(" {symbol}{}", " ".repeat(padding));

    let mut style = if cell.chosen {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if cell.reachable {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default()
    };
    if cell.occupant.is_some() && cell.occupant.as_deref() == local {
        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

/// Key shown on an open edge of the chosen cell.
fn affordance(cell: &CellView, dir: WallDirection) -> Option<char> {
    (cell.chosen && cell.wall_options.contains(&dir)).then(|| wall_key(dir))
}

fn affordance_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use wallgame_app::{GridState, SelectionState};

    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_board_has_perimeter_only() {
        let view = BoardView::project(&GridState::new(2), &SelectionState::default());
        assert_eq!(text(&lines(&view, Position::new(0, 0), None)), vec![
            "+---+---+",
            "|       |",
            "+   +   +",
            "|       |",
            "+---+---+",
        ]);
    }

    #[test]
    fn start_positions_are_labelled() {
        let grid = GridState::with_start_positions(2, &[Position::new(0, 0), Position::new(1, 1)]);
        let view = BoardView::project(&grid, &SelectionState::default());
        let rows = text(&lines(&view, Position::new(0, 0), None));
        assert_eq!(rows[1], "| 1     |");
        assert_eq!(rows[3], "|     2 |");
    }
}
