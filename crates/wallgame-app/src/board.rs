//! Board state and its rendered projection.
//!
//! [`GridState`] is the last snapshot received from the server. It is replaced
//! wholesale on every `update_game_map` and never patched. [`BoardView`] is a
//! pure function of a grid and a selection. It owns no state between renders.
//!
//! # Wall decoding
//!
//! For the cell at (i, j):
//!
//! - top: `wall_top[i][j]` is set
//! - bottom: `wall_top[i + 1][j]` is set or absent
//! - left: `wall_left[i][j]` is set
//! - right: `wall_left[i][j + 1]` is set or absent
//!
//! Entries the server leaves out count as walls, and the outer edge of the grid
//! is always walled. The server therefore never needs to send boundary entries.

use wallgame_proto::{
    Occupant, PlayerId, Position, WallDirection, WallMatrix, payloads::server::GameMap,
};

use crate::SelectionState;

/// Walls around a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellWalls {
    /// Wall on the north edge.
    pub top: bool,
    /// Wall on the south edge.
    pub bottom: bool,
    /// Wall on the west edge.
    pub left: bool,
    /// Wall on the east edge.
    pub right: bool,
}

impl CellWalls {
    /// True if the given edge is walled.
    pub fn has(self, dir: WallDirection) -> bool {
        match dir {
            WallDirection::Left => self.left,
            WallDirection::Right => self.right,
            WallDirection::Top => self.top,
            WallDirection::Bottom => self.bottom,
        }
    }

    /// Edges without a wall, in presentation order.
    pub fn open_directions(self) -> Vec<WallDirection> {
        WallDirection::ALL.into_iter().filter(|&dir| !self.has(dir)).collect()
    }
}

/// Snapshot of walls and player positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    size: usize,
    wall_top: WallMatrix,
    wall_left: WallMatrix,
    occupants: Vec<Occupant>,
}

impl GridState {
    /// Empty board: no interior walls, nobody on it.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            wall_top: WallMatrix::empty(size + 1, size),
            wall_left: WallMatrix::empty(size, size + 1),
            occupants: Vec::new(),
        }
    }

    /// Empty board with numbered placeholders on the configured start cells.
    pub fn with_start_positions(size: usize, positions: &[Position]) -> Self {
        let mut grid = Self::new(size);
        grid.occupants = positions
            .iter()
            .enumerate()
            .filter(|(_, pos)| pos.within(size))
            .map(|(i, &pos)| Occupant { pos, player: (i + 1).to_string() })
            .collect();
        grid
    }

    /// Replace state from a server snapshot.
    ///
    /// Occupants outside the grid are dropped so every stored occupant stays
    /// within `[0, size)²`.
    pub fn from_map(size: usize, map: GameMap) -> Self {
        let GameMap { wall_top, wall_left, players_info } = map;
        let occupants = players_info
            .into_iter()
            .filter(|occupant| {
                let inside = occupant.pos.within(size);
                if !inside {
                    tracing::warn!(
                        player = %occupant.player,
                        pos = %occupant.pos,
                        size,
                        "dropping occupant outside the grid"
                    );
                }
                inside
            })
            .collect();
        Self { size, wall_top, wall_left, occupants }
    }

    /// Remove every interior wall, keeping occupants.
    pub fn clear_walls(&mut self) {
        self.wall_top = WallMatrix::empty(self.size + 1, self.size);
        self.wall_left = WallMatrix::empty(self.size, self.size + 1);
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Occupied cells in server order.
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    /// Walls around `pos`.
    pub fn walls_at(&self, pos: Position) -> CellWalls {
        let Position { row, col } = pos;
        let last = self.size.saturating_sub(1);
        let walled = |matrix: &WallMatrix, r: usize, c: usize| matrix.get(r, c).unwrap_or(true);

        CellWalls {
            top: row == 0 || self.wall_top.get(row, col) == Some(true),
            bottom: row >= last || walled(&self.wall_top, row + 1, col),
            left: col == 0 || self.wall_left.get(row, col) == Some(true),
            right: col >= last || walled(&self.wall_left, row, col + 1),
        }
    }

    /// Player standing on `pos`, if any.
    pub fn occupant_at(&self, pos: Position) -> Option<&PlayerId> {
        self.occupants.iter().find(|o| o.pos == pos).map(|o| &o.player)
    }

    /// Cell of `player`, if on the board.
    pub fn position_of(&self, player: &str) -> Option<Position> {
        self.occupants.iter().find(|o| o.player == player).map(|o| o.pos)
    }
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Coordinate of the cell.
    pub pos: Position,
    /// Walled edges.
    pub walls: CellWalls,
    /// Player standing here.
    pub occupant: Option<PlayerId>,
    /// The cell is a legal destination this turn.
    pub reachable: bool,
    /// The cell is the chosen destination.
    pub chosen: bool,
    /// Wall-placement affordances shown on the chosen cell.
    pub wall_options: Vec<WallDirection>,
}

/// Rendered board, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    size: usize,
    cells: Vec<CellView>,
}

impl BoardView {
    /// Project a grid and a selection into cells.
    pub fn project(grid: &GridState, selection: &SelectionState) -> Self {
        let size = grid.size();
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                let chosen = selection.chosen() == Some(pos);
                cells.push(CellView {
                    pos,
                    walls: grid.walls_at(pos),
                    occupant: grid.occupant_at(pos).cloned(),
                    reachable: selection.is_reachable(pos),
                    chosen,
                    wall_options: if chosen {
                        selection.wall_options().to_vec()
                    } else {
                        Vec::new()
                    },
                });
            }
        }
        Self { size, cells }
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `pos`. `None` if outside the grid.
    pub fn cell(&self, pos: Position) -> Option<&CellView> {
        if pos.within(self.size) { self.cells.get(pos.row * self.size + pos.col) } else { None }
    }

    /// All cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[CellView] {
        let start = (row * self.size).min(self.cells.len());
        let end = (start + self.size).min(self.cells.len());
        &self.cells[start..end]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }
}
