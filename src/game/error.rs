//! Error types for game module
//!
//! Illegal moves are not errors: the rules answer `false` and the session
//! reports a rejected outcome. These variants cover lookups and input that
//! cannot be turned into a game action at all.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// No puzzle with that name
    #[error("Unknown puzzle: {name}")]
    UnknownPuzzle { name: String },

    /// Text that is not a square on the board
    #[error("Invalid square: {input:?} (expected a1..h8)")]
    InvalidSquare { input: String },

    /// Text that is not a from/to square pair
    #[error("Invalid move text: {input:?} (expected e.g. e2e4)")]
    InvalidMoveText { input: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
