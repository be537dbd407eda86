//! Value types shared by server and client messages.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ProtocolError;

/// Player symbol assigned by the server (e.g. `"甲"`).
pub type PlayerId = String;

/// Grid coordinate. Encoded on the wire as `[row, col]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Relative motion needed to get from `origin` to `self`.
    pub fn motion_from(self, origin: Position) -> Motion {
        Motion {
            d_row: self.row as i32 - origin.row as i32,
            d_col: self.col as i32 - origin.col as i32,
        }
    }

    /// True if the position lies inside an `size`×`size` grid.
    pub fn within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Position> for [usize; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Relative move `[dRow, dCol]` sent with a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Motion {
    /// Row delta (positive is down).
    pub d_row: i32,
    /// Column delta (positive is right).
    pub d_col: i32,
}

impl From<[i32; 2]> for Motion {
    fn from([d_row, d_col]: [i32; 2]) -> Self {
        Self { d_row, d_col }
    }
}

impl From<Motion> for [i32; 2] {
    fn from(motion: Motion) -> Self {
        [motion.d_row, motion.d_col]
    }
}

/// Edge of a cell on which a wall is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallDirection {
    /// West edge.
    Left,
    /// East edge.
    Right,
    /// North edge.
    Top,
    /// South edge.
    Bottom,
}

impl WallDirection {
    /// All directions, in the order affordances are presented.
    pub const ALL: [WallDirection; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Wire name of the direction.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for WallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a room as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Waiting for the remaining seats to fill.
    Waiting,
    /// A game is in progress.
    Running,
    /// The game ended; a restart vote may follow.
    Finished,
}

/// A player standing on a cell. Encoded on the wire as `[row, col, player]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize, PlayerId)", into = "(usize, usize, PlayerId)")]
pub struct Occupant {
    /// Cell the player stands on.
    pub pos: Position,
    /// Symbol of the player.
    pub player: PlayerId,
}

impl From<(usize, usize, PlayerId)> for Occupant {
    fn from((row, col, player): (usize, usize, PlayerId)) -> Self {
        Self { pos: Position::new(row, col), player }
    }
}

impl From<Occupant> for (usize, usize, PlayerId) {
    fn from(occupant: Occupant) -> Self {
        (occupant.pos.row, occupant.pos.col, occupant.player)
    }
}

/// Boolean wall grid, encoded on the wire as rows of `'0'`/`'1'` characters.
///
/// Rows may be ragged or missing. Lookups outside the stored rows return
/// `None` and callers decide what an absent entry means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WallMatrix {
    rows: Vec<Vec<bool>>,
}

impl WallMatrix {
    /// Matrix with `rows`×`cols` entries, none of them set.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self { rows: vec![vec![false; cols]; rows] }
    }

    /// Build from already decoded rows.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Parse wire rows such as `["0110", "0000"]`.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, ProtocolError> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, text)| {
                text.as_ref()
                    .chars()
                    .map(|character| match character {
                        '0' => Ok(false),
                        '1' => Ok(true),
                        _ => Err(ProtocolError::InvalidWallRow { row, character }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    /// Entry at (`row`, `col`). `None` if the entry is absent.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set an entry, growing the matrix as needed.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, false);
        }
        cells[col] = value;
    }

    /// Number of stored rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Wire form of the matrix.
    pub fn to_wire_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&set| if set { '1' } else { '0' }).collect())
            .collect()
    }
}

impl Serialize for WallMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WallMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        Self::parse(&rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_flag_characters() {
        let err = WallMatrix::parse(&["010", "01x"]).unwrap_err();
        assert_eq!(err, ProtocolError::InvalidWallRow { row: 1, character: 'x' });
    }

    #[test]
    fn absent_entries_are_none() {
        let matrix = WallMatrix::parse(&["10", "0"]).unwrap();
        assert_eq!(matrix.get(0, 0), Some(true));
        assert_eq!(matrix.get(1, 0), Some(false));
        assert_eq!(matrix.get(1, 1), None);
        assert_eq!(matrix.get(2, 0), None);
    }

    #[test]
    fn set_grows_matrix() {
        let mut matrix = WallMatrix::default();
        matrix.set(1, 2, true);
        assert_eq!(matrix.to_wire_rows(), vec!["".to_string(), "001".to_string()]);
    }

    #[test]
    fn motion_is_relative_to_origin() {
        let motion = Position::new(1, 2).motion_from(Position::new(3, 0));
        assert_eq!(motion, Motion { d_row: -2, d_col: 2 });
    }
}
