//! Room configuration handed to the core at room entry.

use thiserror::Error;
use wallgame_proto::Position;

/// Smallest board the server accepts.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board the server accepts.
pub const MAX_BOARD_SIZE: usize = 20;

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Invalid room configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Size outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[error("board size {0} out of range (2..=20)")]
    SizeOutOfRange(usize),

    /// Start position outside the board.
    #[error("start position {pos} outside a {size}x{size} board")]
    PositionOutOfRange {
        /// Offending position.
        pos: Position,
        /// Board size.
        size: usize,
    },

    /// Two players share a start cell.
    #[error("duplicate start position {0}")]
    DuplicatePosition(Position),

    /// Fewer than two players.
    #[error("at least two start positions are required, got {0}")]
    TooFewPlayers(usize),
}

/// Board dimension and start cells for a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomConfig {
    size: usize,
    player_positions: Vec<Position>,
}

impl RoomConfig {
    /// Validate a configuration.
    pub fn new(size: usize, player_positions: Vec<Position>) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::SizeOutOfRange(size));
        }
        if player_positions.len() < 2 {
            return Err(ConfigError::TooFewPlayers(player_positions.len()));
        }
        for (i, &pos) in player_positions.iter().enumerate() {
            if !pos.within(size) {
                return Err(ConfigError::PositionOutOfRange { pos, size });
            }
            if player_positions[..i].contains(&pos) {
                return Err(ConfigError::DuplicatePosition(pos));
            }
        }
        Ok(Self { size, player_positions })
    }

    /// Two players in opposite corners.
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        let last = size.saturating_sub(1);
        Self::new(size, vec![Position::new(0, 0), Position::new(last, last)])
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Start cells, in seat order.
    pub fn player_positions(&self) -> &[Position] {
        &self.player_positions
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        let last = DEFAULT_BOARD_SIZE - 1;
        Self {
            size: DEFAULT_BOARD_SIZE,
            player_positions: vec![Position::new(0, 0), Position::new(last, last)],
        }
    }
}
