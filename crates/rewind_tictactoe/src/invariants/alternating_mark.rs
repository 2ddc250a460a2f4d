//! Alternating mark invariant: X and O take turns, X first.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the mark placed by record `i` belongs to X when `i` is odd
/// and to O when `i` is even, matching the step parity that decides who
/// moves next.
pub struct AlternatingMarkInvariant;

impl Invariant<GameState> for AlternatingMarkInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, record)| {
                let expected = Player::for_step(i - 1);
                record
                    .position()
                    .and_then(|pos| record.board().get(pos).player())
                    == Some(expected)
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
