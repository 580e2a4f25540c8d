use thiserror::Error;

use crate::{Color, Coordinate, PieceKind};

/// Why a move was rejected. Every variant leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("No piece to move")]
    EmptyOrigin(Coordinate),

    #[error("Wrong color piece")]
    WrongTurn { piece: Color, side_to_move: Color },

    #[error("Invalid move for {0}")]
    IllegalShape(PieceKind),

    #[error("Square out of range (rank {rank}, file {file})")]
    OutOfRange { rank: u8, file: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_reason() {
        let e4 = Coordinate::from_algebraic("e4").unwrap();
        assert_eq!(MoveError::EmptyOrigin(e4).to_string(), "No piece to move");
        assert_eq!(
            MoveError::WrongTurn {
                piece: Color::Black,
                side_to_move: Color::White,
            }
            .to_string(),
            "Wrong color piece"
        );
        assert_eq!(
            MoveError::IllegalShape(PieceKind::Knight).to_string(),
            "Invalid move for Knight"
        );
        assert_eq!(
            MoveError::OutOfRange { rank: 9, file: 1 }.to_string(),
            "Square out of range (rank 9, file 1)"
        );
    }
}
