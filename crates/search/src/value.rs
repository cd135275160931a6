//! Values passed up the search tree and the result handed to callers.

use duel_core::{Game, GameError, Player, Result, Utility};

/// Game-theoretic value of a node, from the maximizer's perspective, paired
/// with the action that achieves it.
///
/// `action` is `None` only at terminal states.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchValue<A> {
    pub value: Utility,
    pub action: Option<A>,
}

impl<A: Copy> SearchValue<A> {
    /// Value of a terminal state.
    pub fn terminal(value: Utility) -> Self {
        Self { value, action: None }
    }

    /// Starting accumulator for a MAX node.
    pub(crate) fn worst_for_max() -> Self {
        Self::terminal(Utility::NEG_INFINITY)
    }

    /// Starting accumulator for a MIN node.
    pub(crate) fn worst_for_min() -> Self {
        Self::terminal(Utility::INFINITY)
    }

    /// Keep `action` if its value is strictly greater. Earlier actions win
    /// ties. Returns whether the accumulator changed.
    pub(crate) fn raise(&mut self, value: Utility, action: A) -> bool {
        if self.action.is_none() || value > self.value {
            self.value = value;
            self.action = Some(action);
            true
        } else {
            false
        }
    }

    /// Keep `action` if its value is strictly smaller. Earlier actions win
    /// ties. Returns whether the accumulator changed.
    pub(crate) fn lower(&mut self, value: Utility, action: A) -> bool {
        if self.action.is_none() || value < self.value {
            self.value = value;
            self.action = Some(action);
            true
        } else {
            false
        }
    }
}

/// Result of a root search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult<A> {
    /// Recommended action for the player to move.
    pub action: A,

    /// Root value from the maximizer's perspective.
    pub value: Utility,

    /// Number of tree nodes visited, root included.
    pub nodes: u64,
}

/// Score `state` if it is terminal.
pub(crate) fn leaf_value<G: Game>(
    game: &G,
    state: &G::State,
    maximizer: Player,
) -> Result<Option<Utility>> {
    if game.is_terminal(state) {
        game.utility(state, maximizer).map(Some)
    } else {
        Ok(None)
    }
}

/// Legal actions of a non-terminal state.
pub(crate) fn expand<G: Game>(game: &G, state: &G::State) -> Result<Vec<G::Action>> {
    let actions = game.actions(state);
    if actions.is_empty() {
        return Err(GameError::NoLegalActions);
    }
    Ok(actions)
}

/// Turn the root node's value into a result.
pub(crate) fn into_result<A: Copy>(root: SearchValue<A>, nodes: u64) -> Result<SearchResult<A>> {
    let action = root.action.ok_or(GameError::TerminalState)?;
    Ok(SearchResult {
        action,
        value: root.value,
        nodes,
    })
}
