//! End-to-end searches over the demonstration games.

use duel_core::{check_terminal, Game, GameError, Player, Result, Utility};
use duel_games::{
    Bucket, BucketAction, Buckets, Halving, HalvingAction, TicTacToe, TicTacToeAction,
};
use duel_search::{
    alpha_beta_search, minimax_search, search, AlphaBeta, Algorithm, Minimax, SearchConfig,
};

/// Play a game to the end, every move chosen by `choose`.
fn self_play<G, F>(game: &G, mut choose: F) -> (Vec<G::Action>, G::State)
where
    G: Game,
    F: FnMut(&G::State) -> Result<G::Action>,
{
    let mut state = game.initial_state();
    let mut moves = Vec::new();
    while !game.is_terminal(&state) {
        let action = choose(&state).unwrap();
        moves.push(action);
        state = game.result(&state, action).unwrap();
    }
    (moves, state)
}

#[test]
fn test_halving_from_five() {
    use HalvingAction::{Decrement, Halve};

    let game = Halving::new(5);
    let config = SearchConfig::default();

    let (moves, end) = self_play(&game, |state| minimax_search(&game, state, &config));
    assert_eq!(moves, vec![Decrement, Decrement, Halve, Decrement]);
    assert_eq!(game.to_move(&end), Player::First);
    assert_eq!(game.utility(&end, Player::First), Ok(1.0));

    let (ab_moves, _) = self_play(&game, |state| alpha_beta_search(&game, state, &config));
    assert_eq!(ab_moves, moves);
}

#[test]
fn test_halving_with_mover_as_maximizer() {
    use HalvingAction::{Decrement, Halve};

    // The driver searches with the player to move as maximizer
    let game = Halving::new(5);
    let (moves, end) = self_play(&game, |state| {
        let config = SearchConfig::with_maximizer(game.to_move(state));
        minimax_search(&game, state, &config)
    });

    assert_eq!(moves, vec![Decrement, Decrement, Halve, Decrement]);
    assert_eq!(game.utility(&end, Player::First), Ok(1.0));
}

#[test]
fn test_buckets_never_chooses_a() {
    let game = Buckets;
    let root = game.initial_state();

    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let config = SearchConfig::default().algorithm(algorithm);
        let result = search(&game, &root, &config).unwrap();
        assert_eq!(result.action, BucketAction::Bucket(Bucket::B));
        assert_eq!(result.value, 1.0);
    }
}

#[test]
fn test_buckets_second_player_as_maximizer() {
    let game = Buckets;
    let root = game.initial_state();

    // The root mover is now the minimizer of the second player's utility
    let config = SearchConfig::with_maximizer(Player::Second);
    let result = Minimax::new(&game, &config).search(&root).unwrap();
    assert_eq!(result.action, BucketAction::Bucket(Bucket::B));
    assert_eq!(result.value, -1.0);

    let result = AlphaBeta::new(&game, &config).search(&root).unwrap();
    assert_eq!(result.action, BucketAction::Bucket(Bucket::B));
    assert_eq!(result.value, -1.0);
}

#[test]
fn test_buckets_reply_values() {
    let game = Buckets;
    let config = SearchConfig::default();
    let mut minimax = Minimax::new(&game, &config);
    let root = game.initial_state();

    let replies: Vec<Utility> = Bucket::ALL
        .iter()
        .map(|&bucket| {
            let chosen = game.result(&root, BucketAction::Bucket(bucket)).unwrap();
            minimax.min_value(&chosen).unwrap().value
        })
        .collect();
    assert_eq!(replies, vec![-50.0, 1.0, -5.0]);

    let chosen = game.result(&root, BucketAction::Bucket(Bucket::A)).unwrap();
    let reply = minimax.min_value(&chosen).unwrap();
    assert_eq!(reply.action, Some(BucketAction::Number(-50)));
}

#[test]
fn test_tictactoe_empty_board_is_a_draw() {
    let game = TicTacToe;
    let root = game.initial_state();
    let config = SearchConfig::default();

    let minimax = Minimax::new(&game, &config).search(&root).unwrap();
    assert_eq!(minimax.value, 0.0);
    assert_eq!(minimax.nodes, 549_946);

    let alpha_beta = AlphaBeta::new(&game, &config).search(&root).unwrap();
    assert_eq!(alpha_beta.value, 0.0);
    assert!(
        alpha_beta.nodes < minimax.nodes,
        "alpha-beta visited {} nodes, minimax {}",
        alpha_beta.nodes,
        minimax.nodes
    );
}

#[test]
fn test_tictactoe_minimax_self_play_draws() {
    let game = TicTacToe;
    let config = SearchConfig::default();

    let (moves, end) = self_play(&game, |state| minimax_search(&game, state, &config));
    assert_eq!(moves.len(), 9);
    assert_eq!(game.utility(&end, Player::First), Ok(0.0));
    assert_eq!(game.utility(&end, Player::Second), Ok(0.0));
    assert_eq!(check_terminal(&game, &end), Ok(()));
}

#[test]
fn test_tictactoe_alpha_beta_self_play_draws() {
    let game = TicTacToe;
    let (_, end) = self_play(&game, |state| {
        let config = SearchConfig::with_maximizer(game.to_move(state));
        alpha_beta_search(&game, state, &config)
    });
    assert_eq!(game.utility(&end, Player::First), Ok(0.0));
}

#[test]
fn test_tictactoe_finds_winning_move() {
    let game = TicTacToe;
    // x _ x
    // o o _
    // _ _ _
    let mut state = game.initial_state();
    for cell in [0, 3, 2, 4] {
        state = game
            .result(&state, TicTacToeAction::from_index(cell).unwrap())
            .unwrap();
    }

    let config = SearchConfig::default();
    assert_eq!(
        minimax_search(&game, &state, &config),
        Ok(TicTacToeAction::new(0, 1))
    );
    assert_eq!(
        alpha_beta_search(&game, &state, &config),
        Ok(TicTacToeAction::new(0, 1))
    );
}

#[test]
fn test_tictactoe_blocks_winning_move() {
    let game = TicTacToe;
    // x x _
    // o _ _
    // _ _ _
    let mut state = game.initial_state();
    for cell in [0, 3, 1] {
        state = game
            .result(&state, TicTacToeAction::from_index(cell).unwrap())
            .unwrap();
    }

    let config = SearchConfig::with_maximizer(Player::Second);
    assert_eq!(
        minimax_search(&game, &state, &config),
        Ok(TicTacToeAction::new(0, 2))
    );

    // Same choice when the first player is the maximizer
    assert_eq!(
        alpha_beta_search(&game, &state, &SearchConfig::default()),
        Ok(TicTacToeAction::new(0, 2))
    );
}

#[test]
fn test_search_is_deterministic() {
    let game = TicTacToe;
    let root = game.initial_state();
    let config = SearchConfig::alpha_beta();

    let first = search(&game, &root, &config).unwrap();
    for _ in 0..3 {
        assert_eq!(search(&game, &root, &config).unwrap(), first);
    }
}

#[test]
fn test_terminal_root_is_rejected() {
    let game = Halving::new(0);
    let root = game.initial_state();
    let config = SearchConfig::default();

    assert_eq!(minimax_search(&game, &root, &config), Err(GameError::TerminalState));
    assert_eq!(alpha_beta_search(&game, &root, &config), Err(GameError::TerminalState));
    assert!(matches!(
        Minimax::new(&game, &config).search(&root),
        Err(GameError::TerminalState)
    ));
    assert!(matches!(
        AlphaBeta::new(&game, &config).search(&root),
        Err(GameError::TerminalState)
    ));
}

/// A game that breaks the contract in a configurable way.
struct Broken {
    /// Non-terminal states report no actions.
    no_actions: bool,
}

impl Game for Broken {
    type State = u8;
    type Action = u8;

    fn initial_state(&self) -> u8 {
        2
    }

    fn to_move(&self, state: &u8) -> Player {
        if state % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    fn actions(&self, state: &u8) -> Vec<u8> {
        if self.no_actions && *state == 1 {
            Vec::new()
        } else if *state == 0 {
            Vec::new()
        } else {
            // Offers an action its own transition rejects
            vec![1, 2]
        }
    }

    fn result(&self, state: &u8, action: u8) -> Result<u8> {
        if action > *state || action == 2 {
            return Err(GameError::IllegalAction(format!("take {} from {}", action, state)));
        }
        Ok(state - action)
    }

    fn is_terminal(&self, state: &u8) -> bool {
        *state == 0
    }

    fn utility(&self, state: &u8, _player: Player) -> Result<Utility> {
        if *state == 0 {
            Ok(0.0)
        } else {
            Err(GameError::NotTerminal)
        }
    }
}

#[test]
fn test_empty_actions_at_non_terminal_state() {
    let game = Broken { no_actions: true };
    let root = game.initial_state();
    for config in [SearchConfig::default(), SearchConfig::alpha_beta()] {
        assert_eq!(search(&game, &root, &config), Err(GameError::NoLegalActions));
    }
}

#[test]
fn test_rejected_transition_propagates() {
    let game = Broken { no_actions: false };
    let root = game.initial_state();
    for config in [SearchConfig::default(), SearchConfig::alpha_beta()] {
        assert!(matches!(
            search(&game, &root, &config),
            Err(GameError::IllegalAction(_))
        ));
    }
}
