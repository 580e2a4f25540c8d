use std::fmt;

use crate::{Board, Color, Coordinate, Piece, PieceKind};

/// A request to move whatever stands on `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl Move {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }

    pub fn is_null(&self) -> bool {
        self.from == self.to
    }

    fn rank_diff(&self) -> i8 {
        self.to.rank() as i8 - self.from.rank() as i8
    }

    fn file_diff(&self) -> i8 {
        self.to.file() as i8 - self.from.file() as i8
    }

    /// Whether `piece` standing on `from` may move to `to` on `board`.
    ///
    /// Only the shape and the squares in between are checked. Callers reject
    /// null moves before asking.
    pub fn is_legal_shape(&self, piece: Piece, board: &Board) -> bool {
        match piece.kind {
            PieceKind::Pawn => self.is_valid_pawn_move(piece.color, board),
            PieceKind::Rook => self.is_valid_rook_move(board),
            PieceKind::Knight => self.is_valid_knight_move(),
            PieceKind::Bishop => self.is_valid_bishop_move(board),
            PieceKind::Queen => self.is_valid_queen_move(board),
            PieceKind::King => self.is_valid_king_move(),
        }
    }

    pub fn is_valid_pawn_move(&self, color: Color, board: &Board) -> bool {
        let direction = color.forward();
        let rank_diff = self.rank_diff();
        let file_diff = self.file_diff();

        if file_diff == 0 {
            // Single step
            if rank_diff == direction {
                return board.is_empty(self.to);
            }
            // Initial two-square advance
            if rank_diff == 2 * direction && self.from.rank() == color.pawn_home_rank() {
                let intermediate = self.from.offset(direction, 0);
                return intermediate.is_some_and(|square| board.is_empty(square))
                    && board.is_empty(self.to);
            }
            return false;
        }

        // Diagonal capture of an enemy piece
        if file_diff.abs() == 1 && rank_diff == direction {
            return board
                .occupant_at(self.to)
                .is_some_and(|target| target.color != color);
        }

        false
    }

    pub fn is_valid_rook_move(&self, board: &Board) -> bool {
        if self.rank_diff() != 0 && self.file_diff() != 0 {
            return false;
        }

        self.is_path_clear(board)
    }

    pub fn is_valid_knight_move(&self) -> bool {
        let rank_diff = self.rank_diff().abs();
        let file_diff = self.file_diff().abs();

        (rank_diff == 2 && file_diff == 1) || (rank_diff == 1 && file_diff == 2)
    }

    pub fn is_valid_bishop_move(&self, board: &Board) -> bool {
        let rank_diff = self.rank_diff().abs();
        let file_diff = self.file_diff().abs();

        if rank_diff != file_diff || rank_diff == 0 {
            return false;
        }

        self.is_path_clear(board)
    }

    pub fn is_valid_queen_move(&self, board: &Board) -> bool {
        self.is_valid_rook_move(board) || self.is_valid_bishop_move(board)
    }

    pub fn is_valid_king_move(&self) -> bool {
        let rank_diff = self.rank_diff().abs();
        let file_diff = self.file_diff().abs();

        rank_diff <= 1 && file_diff <= 1
    }

    // Squares strictly between the endpoints must be empty. Only meaningful
    // for straight or diagonal moves.
    fn is_path_clear(&self, board: &Board) -> bool {
        let rank_step = self.rank_diff().signum();
        let file_step = self.file_diff().signum();

        let mut current = self.from.offset(rank_step, file_step);
        while let Some(square) = current {
            if square == self.to {
                return true;
            }
            if !board.is_empty(square) {
                return false;
            }
            current = square.offset(rank_step, file_step);
        }

        true
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
