use std::fmt;

use crate::error::MoveError;

pub const BOARD_SIZE: u8 = 8;

/// A square on the board, always in range.
///
/// Rank 0 is Black's home rank and rank 7 is White's home rank, so the
/// algebraic square `a1` is `(7, 0)` and `h8` is `(0, 7)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    rank: u8,
    file: u8,
}

impl Coordinate {
    pub fn new(rank: u8, file: u8) -> Result<Self, MoveError> {
        if rank < BOARD_SIZE && file < BOARD_SIZE {
            Ok(Self { rank, file })
        } else {
            Err(MoveError::OutOfRange { rank, file })
        }
    }

    /// Parses a two character square such as `e2`.
    pub fn from_algebraic(notation: &str) -> Option<Self> {
        let mut chars = notation.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return None,
        };

        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }

        Some(Self {
            rank: b'8' - rank as u8,
            file: file as u8 - b'a',
        })
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file(self) -> u8 {
        self.file
    }

    /// The square `rank_step` ranks and `file_step` files away, if it is on the board.
    pub fn offset(self, rank_step: i8, file_step: i8) -> Option<Self> {
        let rank = self.rank as i8 + rank_step;
        let file = self.file as i8 + file_step;
        if (0..BOARD_SIZE as i8).contains(&rank) && (0..BOARD_SIZE as i8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Every square, rank 0 first and file 0 first within a rank.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Self { rank, file }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file) as char,
            (b'8' - self.rank) as char
        )
    }
}
