use log::{debug, trace};

use crate::{
    rules::FriendlyCapture, Board, Color, Coordinate, Move, MoveError, Piece, Rules,
};

/// The board plus whose turn it is. Only `attempt_move` changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    rules: Rules,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self {
            board: Board::new(),
            side_to_move: Color::White,
            rules,
        }
    }

    /// Starts from an arbitrary layout.
    pub fn from_board(board: Board, side_to_move: Color, rules: Rules) -> Self {
        Self {
            board,
            side_to_move,
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Like `attempt_move`, for raw `(rank, file)` index pairs.
    pub fn attempt(&mut self, from: (u8, u8), to: (u8, u8)) -> Result<Option<Piece>, MoveError> {
        let from = Coordinate::new(from.0, from.1)?;
        let to = Coordinate::new(to.0, to.1)?;
        self.attempt_move(Move::new(from, to))
    }

    /// Validates and applies a move, handing the turn to the other side.
    ///
    /// Returns the captured occupant, if any. On error nothing changes.
    pub fn attempt_move(&mut self, mv: Move) -> Result<Option<Piece>, MoveError> {
        let piece = self.validate(mv).inspect_err(|err| {
            trace!("rejected {mv}: {err:?}");
        })?;

        let captured = self.board.clear(mv.to);
        self.board.clear(mv.from);
        self.board.place(mv.to, piece);
        self.side_to_move = !self.side_to_move;

        match captured {
            Some(target) => debug!("{piece} {mv} takes {target}"),
            None => debug!("{piece} {mv}"),
        }

        Ok(captured)
    }

    fn validate(&self, mv: Move) -> Result<Piece, MoveError> {
        let piece = self
            .board
            .occupant_at(mv.from)
            .ok_or(MoveError::EmptyOrigin(mv.from))?;

        if piece.color != self.side_to_move {
            return Err(MoveError::WrongTurn {
                piece: piece.color,
                side_to_move: self.side_to_move,
            });
        }

        if mv.is_null() || !mv.is_legal_shape(piece, &self.board) {
            return Err(MoveError::IllegalShape(piece.kind));
        }

        if self.rules.friendly_capture == FriendlyCapture::Forbidden
            && self
                .board
                .occupant_at(mv.to)
                .is_some_and(|target| target.color == piece.color)
        {
            return Err(MoveError::IllegalShape(piece.kind));
        }

        Ok(piece)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
