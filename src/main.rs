use std::io;

use anyhow::Context;
use chess_core::GameState;
use chess_ui::{Args, Terminal, TerminalConfig};
use clap::Parser;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = TerminalConfig::from(&args);

    let default_level = if config.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let mut game = GameState::with_rules(config.rules);
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout(), config);
    terminal.run(&mut game).context("game loop stopped")?;

    log::info!("final position, {} to move", game.side_to_move());
    Ok(())
}
