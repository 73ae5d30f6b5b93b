//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Fewer players than the game needs.
    #[error("at least {min} players are required, got {got}")]
    TooFewPlayers {
        /// Minimum roster size.
        min: usize,
        /// Supplied roster size.
        got: usize,
    },
    /// More players than the board supports.
    #[error("at most {max} players are allowed, got {got}")]
    TooManyPlayers {
        /// Maximum roster size.
        max: usize,
        /// Supplied roster size.
        got: usize,
    },
}
