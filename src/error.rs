use crate::piece::Player;
use crate::square::Square;

/// Reasons a proposed move is rejected.
///
/// None of these are fatal: the caller reprompts the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square {0} is outside 1..=32")]
    InvalidSquare(u8),

    #[error("cell ({row}, {col}) is not a playable square")]
    NotPlayable { row: u8, col: u8 },

    #[error("no piece on square {0}")]
    NoPieceAtOrigin(Square),

    #[error("piece on square {square} does not belong to {player}")]
    WrongOwnership { square: Square, player: Player },

    #[error("a capture is available and must be taken (origin {origin})")]
    CaptureRequired { origin: Square },

    #[error("piece on square {origin} cannot move to {destination}")]
    Unreachable { origin: Square, destination: Square },

    #[error("square {0} is occupied")]
    DestinationOccupied(Square),

    #[error("{origin} to {destination} is not a one or two step diagonal")]
    NotDiagonal { origin: Square, destination: Square },

    #[error("no opposing piece between {origin} and {destination}")]
    NothingToCapture { origin: Square, destination: Square },

    #[error("the piece on square {square} must continue capturing")]
    MustContinue { square: Square },

    #[error("game is already over")]
    GameOver,
}

/// Errors raised while validating a rules configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
