//! Duel Core - Game abstractions and common types
//!
//! This crate provides the `Game` trait that any two-player, zero-sum,
//! perfect-information game implements to be searchable by `duel-search`.
//!
//! # Types
//!
//! - [`Game`] - Trait for game implementations
//! - [`Player`] - One of the two players, indexed 0 and 1
//! - [`Utility`] - Payoff of a terminal state
//! - [`GameError`] - Contract violations

mod contract;
mod error;
mod game;
mod types;

pub use contract::check_terminal;
pub use error::{GameError, Result};
pub use game::Game;
pub use types::{Player, Utility};
