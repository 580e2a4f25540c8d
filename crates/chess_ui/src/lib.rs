// Terminal front end: notation in, text board out
pub mod config;
pub mod notation;
pub mod render;
pub mod terminal;

pub use config::{Args, TerminalConfig};
pub use notation::{parse_move, NotationError};
pub use render::{render_board, BoardView};
pub use terminal::{Terminal, TerminalError};
