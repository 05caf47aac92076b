//! Board layout notation.
//!
//! A trimmed, two-field cousin of FEN: piece placement and the side to
//! move ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"). The engine
//! carries no castling rights, en-passant square, or move clocks, so
//! those fields do not exist in this notation.

use crate::{Color, Piece};
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 2 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidSideToMove(String),
}

/// Parsed layout data.
///
/// Holds the validated components; the engine's `Position` is
/// responsible for converting them into its grid representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Piece placement, rank 8 first, ranks separated by '/'.
    pub placement: String,
    /// The side to move.
    pub side_to_move: Color,
}

impl Layout {
    /// The standard starting layout, White to move.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Parses a layout string.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let fields: Vec<&str> = s.split_whitespace().collect();

        if fields.len() != 2 {
            return Err(LayoutError::InvalidFieldCount(fields.len()));
        }

        Self::validate_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(LayoutError::InvalidSideToMove(other.to_string())),
        };

        Ok(Layout {
            placement: fields[0].to_string(),
            side_to_move,
        })
    }

    fn validate_placement(placement: &str) -> Result<(), LayoutError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::InvalidPlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let mut squares = 0;
            for c in rank.chars() {
                if let Some(digit) = c.to_digit(10) {
                    squares += digit;
                } else if Piece::from_char(c).is_some() {
                    squares += 1;
                } else {
                    return Err(LayoutError::InvalidPlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if squares != 8 {
                return Err(LayoutError::InvalidPlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    squares
                )));
            }
        }

        Ok(())
    }

    /// Converts the parsed layout back to a layout string.
    pub fn to_text(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {}", self.placement, side)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
