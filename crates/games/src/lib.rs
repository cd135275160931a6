//! Demonstration games for the duel search engine.
//!
//! Each game implements [`duel_core::Game`] with value-type states and a
//! closed action type:
//!
//! - [`Halving`] - decrement or halve a number until it reaches zero
//! - [`Buckets`] - pick a bucket, then the opponent picks a number from it
//! - [`TicTacToe`] - the classic 3x3 game

pub mod buckets;
pub mod halving;
pub mod tictactoe;

pub use buckets::{Bucket, BucketAction, Buckets, BucketsState, Stage};
pub use halving::{Halving, HalvingAction, HalvingState};
pub use tictactoe::{TicTacToe, TicTacToeAction, TicTacToeState};
