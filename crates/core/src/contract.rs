//! Checks for the parts of the game contract the search engine assumes but
//! never verifies while searching.

use crate::{Game, GameError, Player, Result};

/// Verify a finished game: the state is terminal, offers no further actions,
/// and its utilities negate each other.
///
/// # Errors
/// - `GameError::NotTerminal` if the state is still in play
/// - `GameError::IllegalAction` if a terminal state still lists actions
/// - `GameError::NotZeroSum` if the two utilities do not cancel out
pub fn check_terminal<G: Game>(game: &G, state: &G::State) -> Result<()> {
    if !game.is_terminal(state) {
        return Err(GameError::NotTerminal);
    }

    let actions = game.actions(state);
    if !actions.is_empty() {
        return Err(GameError::IllegalAction(format!(
            "terminal state still offers {:?}",
            actions
        )));
    }

    let first = game.utility(state, Player::First)?;
    let second = game.utility(state, Player::Second)?;
    if first + second != 0.0 {
        return Err(GameError::NotZeroSum { first, second });
    }

    Ok(())
}
