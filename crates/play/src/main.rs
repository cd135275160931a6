//! Play the demonstration games with minimax or alpha-beta search.
//!
//! Each turn the player to move asks the search engine for an action, the
//! action is applied and the new state printed, until the game ends.

mod transcript;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use duel_core::{check_terminal, Game, GameError, Player};
use duel_games::{Buckets, Halving, TicTacToe};
use duel_search::{search, Algorithm, SearchConfig};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use transcript::{MoveRecord, Transcript};

/// Two-player game search demonstrations.
#[derive(Parser)]
#[command(name = "duel-play")]
#[command(about = "Play a game where each move is chosen by minimax or alpha-beta search")]
struct Cli {
    #[command(subcommand)]
    game: GameCommand,

    #[command(flatten)]
    options: PlayOptions,
}

#[derive(Subcommand)]
enum GameCommand {
    /// Decrement or halve a number; whoever is to move at zero wins.
    Halving {
        /// Starting number.
        #[arg(short, long, default_value = "5")]
        number: u64,
    },

    /// Choose a bucket, then the opponent takes a number from it.
    Buckets,

    /// Classic 3x3 tic-tac-toe.
    TicTacToe,
}

impl GameCommand {
    fn name(&self) -> &'static str {
        match self {
            GameCommand::Halving { .. } => "halving",
            GameCommand::Buckets => "buckets",
            GameCommand::TicTacToe => "tic-tac-toe",
        }
    }
}

#[derive(Args, Clone, Debug)]
struct PlayOptions {
    /// Search algorithm: minimax or alpha-beta.
    #[arg(short, long, global = true, default_value = "minimax")]
    algorithm: Algorithm,

    /// Fixed maximizing player (0 or 1). By default the player to move
    /// maximizes its own utility.
    #[arg(short, long, global = true, value_parser = parse_player)]
    maximizer: Option<Player>,

    /// Player (0 or 1) that moves uniformly at random instead of searching.
    #[arg(short, long, global = true, value_parser = parse_player)]
    random: Option<Player>,

    /// Random seed for the random player.
    #[arg(long, global = true, default_value = "42")]
    seed: u64,

    /// Write a JSON transcript of the game to this file.
    #[arg(short, long, global = true)]
    transcript: Option<PathBuf>,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Minimax,
            maximizer: None,
            random: None,
            seed: 42,
            transcript: None,
        }
    }
}

fn parse_player(s: &str) -> std::result::Result<Player, String> {
    let index: usize = s
        .parse()
        .map_err(|_| format!("expected a player index, got {:?}", s))?;
    Player::from_index(index).map_err(|e| e.to_string())
}

/// Play one full game, printing every state.
fn play<G>(game: &G, name: &str, options: &PlayOptions) -> Result<Transcript<G::Action>>
where
    G: Game,
    G::State: fmt::Display,
    G::Action: fmt::Display,
{
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let mut state = game.initial_state();
    let mut moves = Vec::new();

    println!("{}", state);
    while !game.is_terminal(&state) {
        let player = game.to_move(&state);

        let (action, value, nodes) = if options.random == Some(player) {
            let action = *game
                .actions(&state)
                .choose(&mut rng)
                .ok_or(GameError::NoLegalActions)?;
            (action, None, None)
        } else {
            let config = SearchConfig::with_maximizer(options.maximizer.unwrap_or(player))
                .algorithm(options.algorithm);
            let result = search(game, &state, &config)
                .with_context(|| format!("Search failed for {} in {}", player, name))?;
            log::info!(
                "{} searched {} nodes, value {} for {}",
                player,
                result.nodes,
                result.value,
                config.maximizer
            );
            (result.action, Some(result.value), Some(result.nodes))
        };

        println!("{}'s action: {}", player, action);
        moves.push(MoveRecord {
            player,
            action,
            notation: action.to_string(),
            value,
            nodes,
        });

        state = game
            .result(&state, action)
            .with_context(|| format!("Failed to apply {} for {}", action, player))?;
        println!("{}", state);
    }

    check_terminal(game, &state).context("Game ended in an inconsistent state")?;
    let utilities = [
        game.utility(&state, Player::First)?,
        game.utility(&state, Player::Second)?,
    ];
    log::info!(
        "{} finished after {} moves: P1 {}, P2 {}",
        name,
        moves.len(),
        utilities[0],
        utilities[1]
    );

    Ok(Transcript {
        game: name.to_string(),
        algorithm: options.algorithm.to_string(),
        moves,
        utilities,
    })
}

/// Play a game and save its transcript if requested.
fn run<G>(game: &G, name: &str, options: &PlayOptions) -> Result<()>
where
    G: Game,
    G::State: fmt::Display,
    G::Action: fmt::Display + Serialize,
{
    let transcript = play(game, name, options)?;
    if let Some(path) = &options.transcript {
        transcript.save(path)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let name = cli.game.name();
    let options = &cli.options;

    match cli.game {
        GameCommand::Halving { number } => run(&Halving::new(number), name, options),
        GameCommand::Buckets => run(&Buckets, name, options),
        GameCommand::TicTacToe => run(&TicTacToe, name, options),
    }
}
