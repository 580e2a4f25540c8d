// Core rules: board storage, per-piece move shapes and the turn state machine
pub mod board;
pub mod coordinate;
pub mod error;
pub mod game;
pub mod moves;
pub mod piece;
pub mod rules;

// Re-export main types for convenience
pub use board::Board;
pub use coordinate::Coordinate;
pub use error::MoveError;
pub use game::GameState;
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use rules::{FriendlyCapture, Rules};
