/// Whether a non-pawn piece may land on a square held by its own side.
///
/// The piece shapes never look at the destination's color, so by default a
/// rook can take a friendly pawn. `Forbidden` rejects such moves in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FriendlyCapture {
    #[default]
    Allowed,
    Forbidden,
}

/// Switches that change which moves the game accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    pub friendly_capture: FriendlyCapture,
}

impl Rules {
    /// Rules that refuse captures of one's own pieces.
    pub fn strict() -> Self {
        Self {
            friendly_capture: FriendlyCapture::Forbidden,
        }
    }
}
