//! Errors used throughout the chess engine.
//!
//! Board mutation itself never fails: "no legal move" is an ordinary `Option`
//! result. `ChessError` covers the outer edges instead: text that does not
//! parse, move requests that do not match a legal move, and player I/O.
//!
//! Usage guidelines:
//! - Parsing and move-request variants are recoverable; interactive callers
//!   report them and ask again.
//! - `InputClosed` and `Io` end an interactive session.

use std::error::Error;
use std::fmt;
use std::io;

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square name such as `e4` could not be parsed.
    ///
    /// Payload: the offending text.
    InvalidSquare(String),

    /// A move request such as `b1c3` could not be parsed.
    InvalidMoveText(String),

    /// FEN text had malformed structure.
    ///
    /// Payload: what was wrong with it.
    InvalidFen(String),

    /// No pseudo-legal move of the requesting side goes from `from` to `to`.
    NoSuchMove { from: Square, to: Square },

    /// The move exists but would leave the mover's own king attacked.
    LeavesKingAttacked { from: Square, to: Square },

    /// A player option name or value was rejected.
    InvalidOption(String),

    /// The interactive input stream ended before a move was entered.
    InputClosed,

    /// Reading or writing player I/O failed.
    ///
    /// Payload: the rendered `io::Error`.
    Io(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidSquare(text) => write!(f, "invalid square: {text}"),
            ChessError::InvalidMoveText(text) => write!(f, "invalid move text: {text}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::NoSuchMove { from, to } => write!(
                f,
                "no move from {} to {}",
                square_name(*from),
                square_name(*to)
            ),
            ChessError::LeavesKingAttacked { from, to } => write!(
                f,
                "move from {} to {} leaves the king attacked",
                square_name(*from),
                square_name(*to)
            ),
            ChessError::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            ChessError::InputClosed => write!(f, "input closed"),
            ChessError::Io(msg) => write!(f, "i/o error: {msg}"),
        }
    }
}

impl Error for ChessError {}

impl From<io::Error> for ChessError {
    fn from(err: io::Error) -> Self {
        ChessError::Io(err.to_string())
    }
}
