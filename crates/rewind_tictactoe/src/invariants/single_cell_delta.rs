//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every record after the first differs from its predecessor
/// in exactly one square, that square was empty before, and the record's
/// location names it.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match before.board().diff(after.board()).as_slice() {
                [pos] => {
                    before.board().get(*pos) == Square::Empty
                        && after.position() == Some(*pos)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(SingleCellDeltaInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_truncated_branch_holds() {
        let state = GameState::new()
            .apply_move(Position::TopLeft)
            .and_then(|s| s.apply_move(Position::TopCenter))
            .unwrap();
        let state = state
            .jump_to(1)
            .unwrap()
            .apply_move(Position::BottomRight)
            .unwrap();
        assert!(SingleCellDeltaInvariant::holds(&state));
        assert_eq!(state.history().len(), 3);
    }
}
