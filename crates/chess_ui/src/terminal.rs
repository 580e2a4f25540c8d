use std::io::{self, BufRead, Write};

use chess_core::{Color, GameState, Move};
use log::info;
use thiserror::Error;

use crate::{notation::parse_move, render::render_board, TerminalConfig};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Prompt and retry loop over any line source and sink.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    config: TerminalConfig,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, config: TerminalConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays until the input runs out. Rejected moves are reported and asked
    /// for again.
    pub fn run(&mut self, game: &mut GameState) -> Result<(), TerminalError> {
        loop {
            self.draw(game)?;

            let Some(mv) = self.read_move(game.side_to_move())? else {
                writeln!(self.output)?;
                return Ok(());
            };

            info!("making move: {mv}");
            if let Err(reason) = game.attempt_move(mv) {
                writeln!(self.output, "{reason}")?;
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn draw(&mut self, game: &GameState) -> io::Result<()> {
        if self.config.clear_screen {
            self.output.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        self.output.write_all(render_board(game.board()).as_bytes())
    }

    // Keeps asking until a well-formed move arrives. `None` on end of input.
    fn read_move(&mut self, side: Color) -> io::Result<Option<Move>> {
        let turn = match side {
            Color::White => 'W',
            Color::Black => 'B',
        };

        loop {
            write!(self.output, "{turn}'s move (e.g., e2e4): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_move(&line) {
                Ok(mv) => return Ok(Some(mv)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chess_core::{Coordinate, Piece, PieceKind, Rules};

    use super::*;

    fn session(input: &str, config: TerminalConfig) -> (GameState, String) {
        let mut game = GameState::with_rules(config.rules);
        let mut terminal = Terminal::new(input.as_bytes(), Vec::new(), config);
        terminal.run(&mut game).unwrap();
        let output = String::from_utf8(terminal.into_output()).unwrap();
        (game, output)
    }

    fn quiet() -> TerminalConfig {
        TerminalConfig {
            clear_screen: false,
            ..TerminalConfig::default()
        }
    }

    fn at(square: &str) -> Coordinate {
        Coordinate::from_algebraic(square).unwrap()
    }

    #[test]
    fn scripted_session_applies_legal_moves() {
        let (game, output) = session("e2e4\nbad\nE7E5\ne1e3\n", quiet());

        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(
            game.board().occupant_at(at("e4")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            game.board().occupant_at(at("e5")),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );

        assert!(output.contains("Invalid move format. Use e.g., e2e4"));
        assert!(output.contains("Invalid move for King"));
        assert_eq!(output.matches("W's move (e.g., e2e4): ").count(), 3);
        assert_eq!(output.matches("B's move (e.g., e2e4): ").count(), 2);
        assert!(!output.contains(CLEAR_SCREEN));
    }

    #[test]
    fn reports_each_rejection_reason() {
        let (game, output) = session("e4e5\ne7e5\na1a5\n", quiet());
        assert_eq!(game, GameState::new());
        assert!(output.contains("No piece to move"));
        assert!(output.contains("Wrong color piece"));
        assert!(output.contains("Invalid move for Rook"));
    }

    #[test]
    fn board_is_redrawn_after_every_attempt() {
        let config = TerminalConfig::default();
        let (_, output) = session("e2e4\ne2e4\n", config);
        // Initial draw plus one per attempt
        assert_eq!(output.matches(CLEAR_SCREEN).count(), 3);
        assert_eq!(output.matches("    a   b   c   d").count(), 3);
    }

    #[test]
    fn strict_rules_reach_the_game() {
        let config = TerminalConfig {
            rules: Rules::strict(),
            ..quiet()
        };
        let (game, output) = session("g1e2\n", config);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(output.contains("Invalid move for Knight"));
    }

    #[test]
    fn empty_input_draws_once_and_stops() {
        let (game, output) = session("", quiet());
        assert_eq!(game, GameState::new());
        assert_eq!(output.matches("W's move").count(), 1);
    }
}
