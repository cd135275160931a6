//! Tic-tac-toe.
//!
//! Tic-tac-toe is a solved game where perfect play always results in a draw,
//! which makes it a good check for exhaustive search:
//! - A searching player never loses
//! - Two searching players always draw

use duel_core::{Game, GameError, Player, Result, Utility};
use serde::Serialize;
use std::fmt;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Tic-tac-toe board state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct TicTacToeState {
    /// Board: 9 cells, indexed 0-8 (row-major).
    /// ```text
    /// 0 | 1 | 2
    /// ---------
    /// 3 | 4 | 5
    /// ---------
    /// 6 | 7 | 8
    /// ```
    board: [Option<Player>; 9],

    /// Current player to move.
    current: Player,

    /// Cached winner (if any).
    winner: Option<Player>,
}

impl TicTacToeState {
    /// Create a new empty board with the first player (x) to move.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: Player::First,
            winner: None,
        }
    }

    /// Get the current player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Get the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Get the owner of a cell, if any.
    pub fn get(&self, action: TicTacToeAction) -> Option<Player> {
        self.board.get(action.index()).copied().flatten()
    }

    /// Check for a winner on the current board.
    fn check_winner(&self) -> Option<Player> {
        for line in LINES {
            if let Some(player) = self.board[line[0]] {
                if self.board[line[1]] == Some(player) && self.board[line[2]] == Some(player) {
                    return Some(player);
                }
            }
        }
        None
    }

    /// Check if the board is full (draw if no winner).
    fn is_full(&self) -> bool {
        self.board.iter().all(|c| c.is_some())
    }

    fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

fn mark(cell: Option<Player>) -> char {
    match cell {
        Some(Player::First) => 'x',
        Some(Player::Second) => 'o',
        None => ' ',
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let cells = &self.board[row * 3..row * 3 + 3];
            writeln!(
                f,
                " {} | {} | {}",
                mark(cells[0]),
                mark(cells[1]),
                mark(cells[2])
            )?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        writeln!(f)?;
        match self.winner {
            Some(player) => write!(f, "{} won", player),
            None if self.is_full() => write!(f, "The game is a draw"),
            None => write!(f, "It is {}'s turn to move", self.current),
        }
    }
}

/// Tic-tac-toe action: the cell to mark.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct TicTacToeAction {
    pub row: u8,
    pub col: u8,
}

impl TicTacToeAction {
    /// Create an action for the given row and column (0-2).
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Action for a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self::new((index / 3) as u8, (index % 3) as u8))
        } else {
            None
        }
    }

    /// Row-major cell index. Out-of-range coordinates map past the board.
    pub fn index(self) -> usize {
        if self.row < 3 && self.col < 3 {
            self.row as usize * 3 + self.col as usize
        } else {
            usize::MAX
        }
    }
}

impl fmt::Display for TicTacToeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Tic-tac-toe game implementation.
#[derive(Clone, Debug)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = TicTacToeState;
    type Action = TicTacToeAction;

    fn initial_state(&self) -> Self::State {
        TicTacToeState::new()
    }

    fn to_move(&self, state: &Self::State) -> Player {
        state.current
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if state.is_over() {
            return Vec::new();
        }
        state
            .board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .filter_map(|(i, _)| TicTacToeAction::from_index(i))
            .collect()
    }

    fn result(&self, state: &Self::State, action: Self::Action) -> Result<Self::State> {
        if state.is_over() {
            return Err(GameError::IllegalAction(format!(
                "{} after the game ended",
                action
            )));
        }
        match state.board.get(action.index()) {
            Some(None) => {}
            Some(Some(_)) => {
                return Err(GameError::IllegalAction(format!("{} is occupied", action)))
            }
            None => return Err(GameError::IllegalAction(format!("{} is off the board", action))),
        }

        let mut new_state = *state;
        new_state.board[action.index()] = Some(state.current);
        new_state.current = state.current.other();
        new_state.winner = new_state.check_winner();
        Ok(new_state)
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.is_over()
    }

    fn utility(&self, state: &Self::State, player: Player) -> Result<Utility> {
        if !state.is_over() {
            return Err(GameError::NotTerminal);
        }
        Ok(match state.winner {
            Some(winner) if winner == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        })
    }
}
