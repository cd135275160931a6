//! Adversarial tree search for two-player zero-sum games.
//!
//! This crate searches any game implementing [`duel_core::Game`] to the end
//! of the game tree and recommends a move for the player to act.
//!
//! # Features
//!
//! - **Minimax**: exhaustive search ([`Minimax`], [`minimax_search`])
//! - **Alpha-beta**: the same values with pruned subtrees ([`AlphaBeta`],
//!   [`alpha_beta_search`])
//! - **Explicit maximizer**: [`SearchConfig::maximizer`] names the player
//!   whose utility is maximized; terminal states are scored from that
//!   player's perspective
//!
//! # Example
//!
//! ```
//! use duel_core::Game;
//! use duel_games::Halving;
//! use duel_search::{minimax_search, SearchConfig};
//!
//! let game = Halving::new(5);
//! let state = game.initial_state();
//! let action = minimax_search(&game, &state, &SearchConfig::default()).unwrap();
//! println!("Best action: {}", action);
//! ```

mod alphabeta;
pub mod config;
mod minimax;
mod value;

pub use alphabeta::AlphaBeta;
pub use config::{Algorithm, SearchConfig};
pub use minimax::Minimax;
pub use value::{SearchResult, SearchValue};

use duel_core::{Game, GameError, Result};

/// Run the algorithm selected by `config` from `state`.
///
/// # Errors
/// Returns `GameError::TerminalState` if `state` is terminal, and any
/// contract violation reported by the game during the search.
pub fn search<G: Game>(
    game: &G,
    state: &G::State,
    config: &SearchConfig,
) -> Result<SearchResult<G::Action>> {
    if game.is_terminal(state) {
        return Err(GameError::TerminalState);
    }

    let result = match config.algorithm {
        Algorithm::Minimax => Minimax::new(game, config).search(state)?,
        Algorithm::AlphaBeta => AlphaBeta::new(game, config).search(state)?,
    };
    log::debug!(
        "{} chose {:?} (value {}, {} nodes, maximizing {})",
        config.algorithm,
        result.action,
        result.value,
        result.nodes,
        config.maximizer
    );
    Ok(result)
}

/// Best action for the player to move, by exhaustive minimax.
///
/// The root is a MAX node when `game.to_move(state)` is the configured
/// maximizer and a MIN node otherwise.
pub fn minimax_search<G: Game>(
    game: &G,
    state: &G::State,
    config: &SearchConfig,
) -> Result<G::Action> {
    let config = config.clone().algorithm(Algorithm::Minimax);
    search(game, state, &config).map(|result| result.action)
}

/// Best action for the player to move, by alpha-beta search.
///
/// Always agrees with [`minimax_search`] on the value of the chosen action.
pub fn alpha_beta_search<G: Game>(
    game: &G,
    state: &G::State,
    config: &SearchConfig,
) -> Result<G::Action> {
    let config = config.clone().algorithm(Algorithm::AlphaBeta);
    search(game, state, &config).map(|result| result.action)
}
