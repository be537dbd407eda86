//! Protocol error types.

use thiserror::Error;

/// Result alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors raised while encoding or decoding wire messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Inbound text was not a valid message.
    #[error("JSON decode failed: {0}")]
    JsonDecode(String),

    /// Outbound message could not be serialized.
    #[error("JSON encode failed: {0}")]
    JsonEncode(String),

    /// A wall row contained something other than `'0'` or `'1'`.
    #[error("invalid wall row {row}: unexpected character {character:?}")]
    InvalidWallRow {
        /// Index of the offending row.
        row: usize,
        /// First character that is not a wall flag.
        character: char,
    },
}
