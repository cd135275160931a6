use thiserror::Error;

use crate::Utility;

/// Errors raised when a game or a search breaks the game contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Utility requested for a non-terminal state")]
    NotTerminal,

    #[error("Illegal action: {0}")]
    IllegalAction(String),

    #[error("Cannot search from a terminal state")]
    TerminalState,

    #[error("No legal actions available at a non-terminal state")]
    NoLegalActions,

    #[error("Utilities are not zero-sum: first player {first}, second player {second}")]
    NotZeroSum { first: Utility, second: Utility },

    #[error("Invalid player index: {0} (expected 0 or 1)")]
    InvalidPlayer(usize),

    #[error("Unknown search algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Convenience Result type for game and search operations
pub type Result<T> = std::result::Result<T, GameError>;
