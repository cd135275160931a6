//! The bucket game.
//!
//! The first player picks one of three buckets, each holding two numbers.
//! The second player then takes one number from that bucket, which settles
//! the game: the number is the payoff for the player to move at the end, and
//! its negation is the payoff for the other player.

use duel_core::{Game, GameError, Player, Result, Utility};
use serde::Serialize;
use std::fmt;

/// One of the three buckets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Bucket {
    A,
    B,
    C,
}

impl Bucket {
    /// All buckets, in the order they are offered.
    pub const ALL: [Bucket; 3] = [Bucket::A, Bucket::B, Bucket::C];

    /// The two numbers held by this bucket.
    pub fn contents(self) -> [i64; 2] {
        match self {
            Bucket::A => [-50, 50],
            Bucket::B => [3, 1],
            Bucket::C => [-5, 15],
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::A => write!(f, "A"),
            Bucket::B => write!(f, "B"),
            Bucket::C => write!(f, "C"),
        }
    }
}

/// How far the game has progressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Stage {
    /// A bucket has yet to be chosen.
    Choosing,
    /// A bucket was chosen; a number has yet to be taken from it.
    Taking(Bucket),
    /// The game is over with this number.
    Settled(i64),
}

/// Bucket game state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct BucketsState {
    current: Player,
    stage: Stage,
}

impl BucketsState {
    /// Create a state with `current` to move at `stage`.
    pub fn new(current: Player, stage: Stage) -> Self {
        Self { current, stage }
    }

    /// Get the current player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Get the stage of the game.
    pub fn stage(&self) -> Stage {
        self.stage
    }
}

impl fmt::Display for BucketsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            Stage::Choosing => write!(f, "The buckets are A, B and C")?,
            Stage::Taking(bucket) => {
                let [low, high] = bucket.contents();
                write!(f, "Bucket {} holds {} and {}", bucket, low, high)?;
            }
            Stage::Settled(number) => {
                let value = if self.current == Player::First { number } else { -number };
                return write!(f, "The number is {} and P1's utility is {}", number, value);
            }
        }
        write!(f, " and it is {}'s turn", self.current)
    }
}

/// Bucket game action.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum BucketAction {
    /// Choose a bucket.
    Bucket(Bucket),
    /// Take a number from the chosen bucket.
    Number(i64),
}

impl fmt::Display for BucketAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketAction::Bucket(bucket) => write!(f, "{}", bucket),
            BucketAction::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Bucket game implementation.
#[derive(Clone, Debug)]
pub struct Buckets;

impl Game for Buckets {
    type State = BucketsState;
    type Action = BucketAction;

    fn initial_state(&self) -> Self::State {
        BucketsState::new(Player::First, Stage::Choosing)
    }

    fn to_move(&self, state: &Self::State) -> Player {
        state.current
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        match state.stage {
            Stage::Choosing => Bucket::ALL.iter().copied().map(BucketAction::Bucket).collect(),
            Stage::Taking(bucket) => bucket
                .contents()
                .iter()
                .copied()
                .map(BucketAction::Number)
                .collect(),
            Stage::Settled(_) => Vec::new(),
        }
    }

    fn result(&self, state: &Self::State, action: Self::Action) -> Result<Self::State> {
        let stage = match (state.stage, action) {
            (Stage::Choosing, BucketAction::Bucket(bucket)) => Stage::Taking(bucket),
            (Stage::Taking(bucket), BucketAction::Number(number))
                if bucket.contents().contains(&number) =>
            {
                Stage::Settled(number)
            }
            (stage, action) => {
                return Err(GameError::IllegalAction(format!(
                    "{} at stage {:?}",
                    action, stage
                )))
            }
        };
        Ok(BucketsState::new(state.current.other(), stage))
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        matches!(state.stage, Stage::Settled(_))
    }

    fn utility(&self, state: &Self::State, player: Player) -> Result<Utility> {
        match state.stage {
            Stage::Settled(number) if player == state.current => Ok(number as Utility),
            Stage::Settled(number) => Ok(-number as Utility),
            _ => Err(GameError::NotTerminal),
        }
    }
}
