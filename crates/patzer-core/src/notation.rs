//! Coordinate move-text parsing.
//!
//! The interactive layer speaks 4-character coordinate text: file letter
//! and rank digit for the origin, then the same for the destination
//! ("e2e4"). Parsing only decodes squares; whether the move is legal is
//! the engine's call.

use crate::Square;
use thiserror::Error;

/// Errors that can occur when parsing coordinate move text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveTextError {
    #[error("expected 4 characters like 'e2e4', got {0}")]
    InvalidLength(usize),

    #[error("'{0}' is not a square on the board")]
    InvalidSquare(String),
}

/// Parses coordinate move text into origin and destination squares.
pub fn parse_move_text(s: &str) -> Result<(Square, Square), MoveTextError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != 4 {
        return Err(MoveTextError::InvalidLength(chars.len()));
    }

    let from = Square::from_chars(chars[0], chars[1])
        .ok_or_else(|| MoveTextError::InvalidSquare(format!("{}{}", chars[0], chars[1])))?;
    let to = Square::from_chars(chars[2], chars[3])
        .ok_or_else(|| MoveTextError::InvalidSquare(format!("{}{}", chars[2], chars[3])))?;

    Ok((from, to))
}
