//! Exhaustive minimax search.
//!
//! `max_value` and `min_value` recurse into each other until terminal states
//! are reached. Every call is one node visit with its own accumulator; the
//! only state shared across the tree is the node counter.

use duel_core::{Game, Player, Result};

use crate::config::SearchConfig;
use crate::value::{expand, into_result, leaf_value, SearchResult, SearchValue};

/// Minimax searcher for one game.
pub struct Minimax<'g, G: Game> {
    game: &'g G,
    maximizer: Player,
    nodes: u64,
}

impl<'g, G: Game> Minimax<'g, G> {
    /// Create a new searcher. Only `config.maximizer` is consulted.
    pub fn new(game: &'g G, config: &SearchConfig) -> Self {
        Self {
            game,
            maximizer: config.maximizer,
            nodes: 0,
        }
    }

    /// Nodes visited since the last call to [`Minimax::search`].
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Search the full tree below `state` and return the best action for the
    /// player to move.
    ///
    /// # Errors
    /// Returns `GameError::TerminalState` if `state` is terminal, and
    /// propagates any contract violation met in the tree.
    pub fn search(&mut self, state: &G::State) -> Result<SearchResult<G::Action>> {
        self.nodes = 0;
        let root = if self.game.to_move(state) == self.maximizer {
            self.max_value(state)?
        } else {
            self.min_value(state)?
        };
        into_result(root, self.nodes)
    }

    /// Value of `state` when the maximizer is to move.
    pub fn max_value(&mut self, state: &G::State) -> Result<SearchValue<G::Action>> {
        self.nodes += 1;
        if let Some(value) = leaf_value(self.game, state, self.maximizer)? {
            return Ok(SearchValue::terminal(value));
        }

        let mut best = SearchValue::worst_for_max();
        for action in expand(self.game, state)? {
            let child = self.game.result(state, action)?;
            let reply = self.min_value(&child)?;
            best.raise(reply.value, action);
        }
        Ok(best)
    }

    /// Value of `state` when the minimizer is to move.
    pub fn min_value(&mut self, state: &G::State) -> Result<SearchValue<G::Action>> {
        self.nodes += 1;
        if let Some(value) = leaf_value(self.game, state, self.maximizer)? {
            return Ok(SearchValue::terminal(value));
        }

        let mut best = SearchValue::worst_for_min();
        for action in expand(self.game, state)? {
            let child = self.game.result(state, action)?;
            let reply = self.max_value(&child)?;
            best.lower(reply.value, action);
        }
        Ok(best)
    }
}
