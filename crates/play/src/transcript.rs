//! JSON record of a finished game.

use anyhow::{Context, Result};
use duel_core::{Player, Utility};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// A single move in a game.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MoveRecord<A> {
    /// Player who moved.
    pub player: Player,

    /// The action taken.
    pub action: A,

    /// Action as printed during play.
    pub notation: String,

    /// Root value from the search maximizer's perspective, `None` for a
    /// random move.
    pub value: Option<Utility>,

    /// Nodes visited by the search, `None` for a random move.
    pub nodes: Option<u64>,
}

/// A complete game.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Transcript<A> {
    /// Name of the game played.
    pub game: String,

    /// Search algorithm used by the searching players.
    pub algorithm: String,

    /// Sequence of moves.
    pub moves: Vec<MoveRecord<A>>,

    /// Final utility for the first and second player.
    pub utilities: [Utility; 2],
}

impl<A> Transcript<A> {
    /// Final utility for `player`.
    pub fn utility(&self, player: Player) -> Utility {
        self.utilities[player.index()]
    }
}

impl<A: Serialize> Transcript<A> {
    /// Write the transcript as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .with_context(|| format!("Failed to serialize transcript to {:?}", path))?;
        log::info!("transcript saved to {:?}", path);
        Ok(())
    }
}
