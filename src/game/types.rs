//! Board coordinate types
//!
//! Newtypes for files, ranks and squares so that x and y never get swapped
//! by accident. Squares are always on the board: the only ways to build one
//! are checked constructors, so the rules code never re-validates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board coordinate representing a file (column) on the chessboard
///
/// Values range from 0 (file 'a') to 7 (file 'h').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct File(u8);

impl File {
    /// Create a file from an index, `None` when it is off the board
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(File(index))
        } else {
            None
        }
    }

    /// Create a file from a character ('a'..='h')
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            c @ 'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    ///
    /// # Examples
    ///
    /// ```
    /// use sinta_chess::game::types::File;
    /// assert_eq!(File::new(4).unwrap().to_char(), 'e');
    /// ```
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board coordinate representing a rank (row) on the chessboard
///
/// Values range from 0 (rank 1) to 7 (rank 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from an index, `None` when it is off the board
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Rank(index))
        } else {
            None
        }
    }

    /// Create a rank from a number (1-8)
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=8).contains(&n) {
            Some(Rank(n - 1))
        } else {
            None
        }
    }

    /// Convert rank to number (1-8)
    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board square position (file, rank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    /// Create a square from file and rank indices, `None` when off the board
    ///
    /// # Examples
    ///
    /// ```
    /// use sinta_chess::game::types::Square;
    /// let e4 = Square::new(4, 3).unwrap();
    /// assert_eq!(e4.to_algebraic(), "e4");
    /// assert!(Square::new(8, 0).is_none());
    /// ```
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        match (File::new(file), Rank::new(rank)) {
            (Some(file), Some(rank)) => Some(Square { file, rank }),
            _ => None,
        }
    }

    /// Build a square from compile-time data known to be on the board.
    ///
    /// Used by the starting layout and the puzzle catalog. Out-of-range
    /// indices fail const evaluation for those tables.
    pub(crate) const fn at(file: u8, rank: u8) -> Self {
        match Square::new(file, rank) {
            Some(square) => square,
            None => panic!("square off the board"),
        }
    }

    /// Create a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let rank_num = rank_char.to_digit(10)? as u8;

        Some(Square {
            file: File::from_char(file_char)?,
            rank: Rank::from_number(rank_num)?,
        })
    }

    /// Convert square to algebraic notation (e.g., "e4")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file.to_char(), self.rank.to_number())
    }

    /// Signed (file, rank) offset from `self` to `other`
    pub fn delta(self, other: Square) -> (i8, i8) {
        (
            other.file.index() as i8 - self.file.index() as i8,
            other.rank.index() as i8 - self.rank.index() as i8,
        )
    }

    /// The square reached by stepping `(dx, dy)`, `None` when it leaves the board
    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        let file = self.file.index() as i8 + dx;
        let rank = self.rank.index() as i8 + dy;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Square::new(file as u8, rank as u8)
        } else {
            None
        }
    }

    /// Convert to tuple (x, y)
    pub fn to_tuple(self) -> (u8, u8) {
        (self.file.index(), self.rank.index())
    }

    /// Every square on the board, rank by rank from a1
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square::at(file, rank)))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = (u8, u8);

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(x, y).ok_or((x, y))
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        square.to_tuple()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_to_char() {
        assert_eq!(File(0).to_char(), 'a');
        assert_eq!(File(4).to_char(), 'e');
        assert_eq!(File(7).to_char(), 'h');
        assert_eq!(File::from_char('E'), Some(File(4)));
        assert_eq!(File::from_char('i'), None);
    }

    #[test]
    fn test_rank_from_number() {
        assert_eq!(Rank::from_number(1), Some(Rank(0)));
        assert_eq!(Rank::from_number(4), Some(Rank(3)));
        assert_eq!(Rank::from_number(8), Some(Rank(7)));
        assert_eq!(Rank::from_number(0), None);
        assert_eq!(Rank::from_number(9), None);
    }

    #[test]
    fn test_square_algebraic() {
        let square = Square::from_algebraic("e4").unwrap();
        assert_eq!(square.file.index(), 4);
        assert_eq!(square.rank.index(), 3);
        assert_eq!(square.to_algebraic(), "e4");

        let square2 = Square::from_algebraic("a1").unwrap();
        assert_eq!(square2.to_tuple(), (0, 0));

        assert_eq!(Square::from_algebraic("e44"), None);
        assert_eq!(Square::from_algebraic("z1"), None);
    }

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(0, 8).is_none());
        assert_eq!(Square::try_from((9, 1)), Err((9, 1)));
        assert_eq!(Square::at(0, 0).offset(-1, 0), None);
        assert_eq!(Square::at(0, 0).offset(1, 2), Square::new(1, 2));
    }

    #[test]
    fn test_square_delta_and_all() {
        assert_eq!(Square::at(4, 1).delta(Square::at(3, 2)), (-1, 1));
        assert_eq!(Square::all().count(), 64);
    }
}
