//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the value the maximizer is already guaranteed on the path to
//! the root, `beta` the value the minimizer is already guaranteed. A node
//! stops expanding siblings once its value falls outside that window.

use duel_core::{Game, Player, Result, Utility};

use crate::config::SearchConfig;
use crate::value::{expand, into_result, leaf_value, SearchResult, SearchValue};

/// Alpha-beta searcher for one game.
pub struct AlphaBeta<'g, G: Game> {
    game: &'g G,
    maximizer: Player,
    nodes: u64,
}

impl<'g, G: Game> AlphaBeta<'g, G> {
    /// Create a new searcher. Only `config.maximizer` is consulted.
    pub fn new(game: &'g G, config: &SearchConfig) -> Self {
        Self {
            game,
            maximizer: config.maximizer,
            nodes: 0,
        }
    }

    /// Nodes visited since the last call to [`AlphaBeta::search`].
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Search from `state` with a full window and return the best action for
    /// the player to move. The root dispatches on the mover exactly like
    /// [`crate::Minimax::search`].
    ///
    /// # Errors
    /// Returns `GameError::TerminalState` if `state` is terminal, and
    /// propagates any contract violation met in the tree.
    pub fn search(&mut self, state: &G::State) -> Result<SearchResult<G::Action>> {
        self.nodes = 0;
        let (alpha, beta) = (Utility::NEG_INFINITY, Utility::INFINITY);
        let root = if self.game.to_move(state) == self.maximizer {
            self.max_value_ab(state, alpha, beta)?
        } else {
            self.min_value_ab(state, alpha, beta)?
        };
        into_result(root, self.nodes)
    }

    /// Value of `state` when the maximizer is to move.
    pub fn max_value_ab(
        &mut self,
        state: &G::State,
        mut alpha: Utility,
        beta: Utility,
    ) -> Result<SearchValue<G::Action>> {
        self.nodes += 1;
        if let Some(value) = leaf_value(self.game, state, self.maximizer)? {
            return Ok(SearchValue::terminal(value));
        }

        let mut best = SearchValue::worst_for_max();
        for action in expand(self.game, state)? {
            let child = self.game.result(state, action)?;
            let reply = self.min_value_ab(&child, alpha, beta)?;
            if best.raise(reply.value, action) {
                alpha = alpha.max(best.value);
            }
            if best.value >= beta {
                break; // Beta cutoff
            }
        }
        Ok(best)
    }

    /// Value of `state` when the minimizer is to move.
    pub fn min_value_ab(
        &mut self,
        state: &G::State,
        alpha: Utility,
        mut beta: Utility,
    ) -> Result<SearchValue<G::Action>> {
        self.nodes += 1;
        if let Some(value) = leaf_value(self.game, state, self.maximizer)? {
            return Ok(SearchValue::terminal(value));
        }

        let mut best = SearchValue::worst_for_min();
        for action in expand(self.game, state)? {
            let child = self.game.result(state, action)?;
            let reply = self.max_value_ab(&child, alpha, beta)?;
            if best.lower(reply.value, action) {
                beta = beta.min(best.value);
            }
            if best.value <= alpha {
                break; // Alpha cutoff
            }
        }
        Ok(best)
    }
}
