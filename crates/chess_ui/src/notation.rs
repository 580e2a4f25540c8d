use chess_core::{Coordinate, Move};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("Invalid move format. Use e.g., e2e4")]
    InvalidFormat(String),
}

/// Parses a four character move such as `e2e4`, ignoring case and
/// surrounding whitespace.
pub fn parse_move(input: &str) -> Result<Move, NotationError> {
    let normalized = input.trim().to_ascii_lowercase();
    let invalid = || NotationError::InvalidFormat(input.to_string());

    // Byte slicing below needs ASCII
    if normalized.len() != 4 || !normalized.is_ascii() {
        return Err(invalid());
    }

    let from = Coordinate::from_algebraic(&normalized[..2]).ok_or_else(invalid)?;
    let to = Coordinate::from_algebraic(&normalized[2..]).ok_or_else(invalid)?;
    Ok(Move::new(from, to))
}
