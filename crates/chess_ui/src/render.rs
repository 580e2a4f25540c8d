use std::fmt;

use chess_core::{coordinate::BOARD_SIZE, Board, Coordinate};

const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";
const FILES: &str = "    a   b   c   d   e   f   g   h  ";

/// Text grid with rank 8 at the top. White pieces are uppercase, Black
/// lowercase, empty squares blank.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;

        for rank in 0..BOARD_SIZE {
            let label = BOARD_SIZE - rank;
            write!(f, "{label} | ")?;
            for file in 0..BOARD_SIZE {
                let symbol = Coordinate::new(rank, file)
                    .ok()
                    .and_then(|square| self.0.occupant_at(square))
                    .map_or(' ', |piece| piece.symbol());
                write!(f, "{symbol} | ")?;
            }
            writeln!(f, "{label}")?;
            writeln!(f, "{SEPARATOR}")?;
        }

        writeln!(f, "{FILES}")
    }
}

pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}
