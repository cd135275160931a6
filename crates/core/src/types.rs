//! Players and payoffs shared by every game.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{GameError, Result};

/// Payoff of a terminal state from one player's perspective.
///
/// Games are expected to be zero-sum: the utility for one player is the
/// negation of the utility for the other.
pub type Utility = f64;

/// One of the two players.
///
/// Index 0 is [`Player::First`], index 1 is [`Player::Second`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players, in index order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Look up a player by index.
    ///
    /// # Errors
    /// Returns `GameError::InvalidPlayer` for any index other than 0 or 1.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Player::First),
            1 => Ok(Player::Second),
            other => Err(GameError::InvalidPlayer(other)),
        }
    }

    /// Index of this player (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Get the opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.index() + 1)
    }
}
