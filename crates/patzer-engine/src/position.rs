//! Board position representation.

use patzer_core::{Color, Layout, LayoutError, Move, Piece, Square};
use std::fmt;

/// A board position: an 8x8 grid of optional pieces plus the side to move.
///
/// The grid is indexed by [`Square`] with row 0 on the rank-8 (Black)
/// side. A position keeps no history: it is mutated in place by
/// [`apply`](Position::apply)/[`undo`](Position::undo) pairs, and undo
/// needs the move and the captured cell contents back from the caller.
/// Pairs must nest last-in-first-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: [[Option<Piece>; 8]; 8],
    side_to_move: Color,
}

impl Position {
    /// Creates a position with no pieces, White to move.
    pub fn empty() -> Self {
        Position {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_layout(Layout::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a position from a layout string.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let parsed = Layout::parse(layout)?;
        let mut position = Position::empty();
        position.side_to_move = parsed.side_to_move;

        // Placement lists rank 8 first, which is row 0 here.
        for (row, rank_str) in parsed.placement.split('/').enumerate() {
            let mut col = 0usize;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit as usize;
                } else if let Some(piece) = Piece::from_char(c) {
                    position.board[row][col] = Some(piece);
                    col += 1;
                }
            }
        }

        Ok(position)
    }

    /// Converts the position to a layout string.
    pub fn to_layout(&self) -> String {
        let mut placement = String::new();

        for (row, rank) in self.board.iter().enumerate() {
            let mut empty_count = 0;
            for cell in rank {
                if let Some(piece) = cell {
                    if empty_count > 0 {
                        placement.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    placement.push(piece.to_char());
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                placement.push_str(&empty_count.to_string());
            }
            if row < 7 {
                placement.push('/');
            }
        }

        Layout {
            placement,
            side_to_move: self.side_to_move,
        }
        .to_text()
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row() as usize][sq.col() as usize]
    }

    /// Returns the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.board[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Applies a move in place and returns the captured piece, if any.
    ///
    /// The destination is overwritten, the origin cleared, and the side
    /// to move flipped. No legality check is made; remembering the
    /// returned capture for the matching [`undo`](Position::undo) is the
    /// caller's job.
    pub fn apply(&mut self, m: Move) -> Option<Piece> {
        let captured = self.piece_at(m.to);
        self.set(m.to, Some(m.piece));
        self.set(m.from, None);
        self.side_to_move = self.side_to_move.opposite();
        captured
    }

    /// Undoes a move previously applied with [`apply`](Position::apply).
    ///
    /// The origin is restored from the move record and `captured` written
    /// back to the destination. Calling this with anything other than the
    /// most recently applied move/capture pair corrupts the position.
    pub fn undo(&mut self, m: Move, captured: Option<Piece>) {
        self.set(m.from, Some(m.piece));
        self.set(m.to, captured);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Applies a move, runs `f`, and undoes the move on the way out.
    ///
    /// This is the scoped form of the apply/undo contract: the undo runs
    /// on every exit path of `f`, so callers cannot leave the move
    /// applied by accident.
    pub fn with_move<R>(&mut self, m: Move, f: impl FnOnce(&mut Self) -> R) -> R {
        let captured = self.apply(m);
        let result = f(self);
        self.undo(m, captured);
        result
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Position {
    /// Renders the board as a text grid, file letters across the top and
    /// bottom, rank numbers down both sides, '.' for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        writeln!(f, " +-----------------+")?;
        for (row, rank) in self.board.iter().enumerate() {
            write!(f, "{}| ", 8 - row)?;
            for cell in rank {
                match cell {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|{}", 8 - row)?;
        }
        writeln!(f, " +-----------------+")?;
        write!(f, "  a b c d e f g h")
    }
}
