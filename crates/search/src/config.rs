//! Search configuration.
//!
//! The maximizing player is configuration, not a convention: every search is
//! told whose utility it maximizes.

use duel_core::{GameError, Player};
use std::fmt;
use std::str::FromStr;

/// Which tree search to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Exhaustive minimax.
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
}

impl FromStr for Algorithm {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" | "ab" => Ok(Algorithm::AlphaBeta),
            _ => Err(GameError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Player whose utility is maximized. Terminal states are always scored
    /// from this player's perspective; the other player minimizes.
    pub maximizer: Player,

    /// Search algorithm used by [`crate::search`].
    pub algorithm: Algorithm,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            maximizer: Player::First,
            algorithm: Algorithm::Minimax,
        }
    }
}

impl SearchConfig {
    /// Create a config that maximizes the given player's utility.
    pub fn with_maximizer(maximizer: Player) -> Self {
        Self {
            maximizer,
            ..Default::default()
        }
    }

    /// Create a config for alpha-beta search.
    pub fn alpha_beta() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            ..Default::default()
        }
    }

    /// Replace the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}
