use std::fmt;
use std::hash::Hash;

use crate::{Player, Result, Utility};

/// A two-player, zero-sum, perfect-information game.
///
/// This trait is the only thing the search engine knows about a game.
/// States are values: `result` borrows its input and returns a fresh state,
/// so a caller can always keep the position it came from.
pub trait Game {
    /// The game state, including the player to move.
    type State: Clone;

    /// A game action. Each game defines its own closed action type.
    type Action: Copy + Eq + Hash + fmt::Debug;

    /// Returns the initial game state
    fn initial_state(&self) -> Self::State;

    /// Returns the player who acts next.
    ///
    /// Defined for terminal states too, where it names the player who would
    /// have moved had the game continued.
    fn to_move(&self, state: &Self::State) -> Player;

    /// Returns all legal actions from the given state, in tie-break order.
    ///
    /// Must be non-empty for every non-terminal state.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action, returning a new state.
    ///
    /// # Errors
    /// Returns `GameError::IllegalAction` if `action` is not one of
    /// `actions(state)`.
    fn result(&self, state: &Self::State, action: Self::Action) -> Result<Self::State>;

    /// Returns true if the game has ended
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Returns the payoff of a terminal state from `player`'s perspective.
    ///
    /// # Errors
    /// Returns `GameError::NotTerminal` if the state is not terminal.
    fn utility(&self, state: &Self::State, player: Player) -> Result<Utility>;
}
