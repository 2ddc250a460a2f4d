//! Opening record invariant: history starts at the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: history is non-empty, its first record is the empty board
/// with no location, and the current step indexes the history.
pub struct InitialRecordInvariant;

impl Invariant<GameState> for InitialRecordInvariant {
    fn holds(state: &GameState) -> bool {
        match state.history().first() {
            Some(first) => {
                *first.board() == Board::new()
                    && first.location().is_none()
                    && state.step() < state.history().len()
            }
            None => false,
        }
    }

    fn description() -> &'static str {
        "History opens with the empty board and the step is in range"
    }
}
