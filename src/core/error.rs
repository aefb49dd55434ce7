use super::Seat;

/// Precondition violations when asking a player to sow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit {index} is outside the board (length {len})")]
    OutOfBounds { index: usize, len: usize },

    #[error("pit {index} is not owned by {seat}")]
    NotOwned { index: usize, seat: Seat },

    #[error("pit {0} is a store and cannot be sown from")]
    Store(usize),

    #[error("bowl {0} is empty")]
    EmptyBowl(usize),

    #[error("the game is already finished")]
    GameOver,
}

/// Errors that can occur when validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown strategy code {0} (expected 1 or 2)")]
    UnknownStrategy(u8),

    #[error("config validation error: {0}")]
    Validation(String),
}
