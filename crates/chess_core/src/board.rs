use crate::{
    coordinate::BOARD_SIZE,
    piece::{Color, PieceKind},
    Coordinate, Piece,
};

const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional occupants, indexed `[rank][file]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// The standard starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    fn setup_initial_position(&mut self) {
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            // Black on rank 0, White on rank 7
            self.squares[0][file] = Some(Piece::new(kind, Color::Black));
            self.squares[7][file] = Some(Piece::new(kind, Color::White));
        }

        for color in [Color::White, Color::Black] {
            let rank = color.pawn_home_rank() as usize;
            for square in self.squares[rank].iter_mut() {
                *square = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
    }

    pub fn occupant_at(&self, coord: Coordinate) -> Option<Piece> {
        self.squares[coord.rank() as usize][coord.file() as usize]
    }

    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.occupant_at(coord).is_none()
    }

    /// Overwrites the square. No legality is checked here.
    pub fn place(&mut self, coord: Coordinate, piece: Piece) {
        self.squares[coord.rank() as usize][coord.file() as usize] = Some(piece);
    }

    /// Empties the square and returns whatever stood there.
    pub fn clear(&mut self, coord: Coordinate) -> Option<Piece> {
        self.squares[coord.rank() as usize][coord.file() as usize].take()
    }

    pub fn occupants(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all()
            .filter_map(move |coord| self.occupant_at(coord).map(|piece| (coord, piece)))
    }

    pub fn occupied_count(&self) -> usize {
        self.occupants().count()
    }

    pub fn count(&self, color: Color) -> usize {
        self.occupants()
            .filter(|(_, piece)| piece.color == color)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
