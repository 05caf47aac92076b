//! Move representation.

use crate::{Piece, Square};
use std::fmt;

/// A move: origin square, destination square, and the piece being moved.
///
/// The piece is carried so that undoing the move can restore the origin
/// square without consulting the board. No legality information is
/// encoded; a move is legal exactly when the generator for its side
/// produces it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move { from, to, piece }
    }

    /// Returns the coordinate text for this move (e.g., "e2e4").
    pub fn to_text(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_text())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
