//! Board square representation.

use std::fmt;

/// A square on the board, addressed by row and column.
///
/// Row 0 is the far side of the board (rank 8, where Black starts) and
/// row 7 the near side (rank 1). Columns run from the a-file (0) to the
/// h-file (7). Both coordinates are always in range; out-of-board squares
/// are unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column indices.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Returns the row (0 at the rank-8 side, 7 at the rank-1 side).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0 at the a-file, 7 at the h-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square offset by the given row and column deltas, or
    /// `None` if that steps off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Decodes a file letter ('a'-'h') and rank digit ('1'-'8') pair.
    ///
    /// Rank 8 maps to row 0, rank 1 to row 7.
    pub const fn from_chars(file: char, rank: char) -> Option<Self> {
        let col = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return None,
        };
        let row = match rank {
            '1'..='8' => 7 - (rank as u8 - b'1'),
            _ => return None,
        };
        Some(Square { row, col })
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        Self::from_chars(bytes[0] as char, bytes[1] as char)
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + (7 - self.row)) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Iterates over all 64 squares in row-major order (a8 first, h1 last).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { row, col }))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
