//! The halving game.
//!
//! Players take turns either decrementing a number or halving it (rounding
//! down). When the number reaches zero the game is over and the player who
//! would move next wins.

use duel_core::{Game, GameError, Player, Result, Utility};
use serde::Serialize;
use std::fmt;

/// Halving game state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct HalvingState {
    current: Player,
    number: u64,
}

impl HalvingState {
    /// Create a state with `player` to move and `number` remaining.
    pub fn new(current: Player, number: u64) -> Self {
        Self { current, number }
    }

    /// Get the current player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// The remaining number.
    pub fn number(&self) -> u64 {
        self.number
    }
}

impl fmt::Display for HalvingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The number is {} and ", self.number)?;
        if self.number == 0 {
            write!(f, "{} won", self.current)
        } else {
            write!(f, "it is {}'s turn", self.current)
        }
    }
}

/// Halving game action.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum HalvingAction {
    /// `number <- number - 1`
    Decrement,
    /// `number <- number / 2`, rounded down
    Halve,
}

impl fmt::Display for HalvingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalvingAction::Decrement => write!(f, "--"),
            HalvingAction::Halve => write!(f, "/2"),
        }
    }
}

/// Halving game starting from a fixed number.
#[derive(Clone, Debug)]
pub struct Halving {
    start: u64,
}

impl Halving {
    /// Create a game that starts at `start` with the first player to move.
    pub fn new(start: u64) -> Self {
        Self { start }
    }
}

impl Game for Halving {
    type State = HalvingState;
    type Action = HalvingAction;

    fn initial_state(&self) -> Self::State {
        HalvingState::new(Player::First, self.start)
    }

    fn to_move(&self, state: &Self::State) -> Player {
        state.current
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        vec![HalvingAction::Decrement, HalvingAction::Halve]
    }

    fn result(&self, state: &Self::State, action: Self::Action) -> Result<Self::State> {
        if self.is_terminal(state) {
            return Err(GameError::IllegalAction(format!(
                "{} after the number reached zero",
                action
            )));
        }
        let number = match action {
            HalvingAction::Decrement => state.number - 1,
            HalvingAction::Halve => state.number / 2,
        };
        Ok(HalvingState::new(state.current.other(), number))
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.number == 0
    }

    fn utility(&self, state: &Self::State, player: Player) -> Result<Utility> {
        if !self.is_terminal(state) {
            return Err(GameError::NotTerminal);
        }
        Ok(if player == state.current { 1.0 } else { -1.0 })
    }
}
