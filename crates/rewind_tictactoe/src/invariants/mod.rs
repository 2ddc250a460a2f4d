//! First-class invariants for tic-tac-toe history.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](super::GameState). They are asserted after each
//! transition in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for 2- and 3-tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod alternating_mark;
pub mod initial_record;
pub mod single_cell_delta;

pub use alternating_mark::AlternatingMarkInvariant;
pub use initial_record::InitialRecordInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All history invariants as a composable set.
pub type GameInvariants = (
    InitialRecordInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarkInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jump() {
        let state = GameState::new()
            .apply_move(Position::TopLeft)
            .and_then(|s| s.apply_move(Position::Center))
            .and_then(|s| s.apply_move(Position::TopRight))
            .unwrap();
        let state = state.jump_to(1).unwrap();
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        use crate::{Board, MoveRecord, Player};

        // O opens and then a record skips ahead by two marks.
        let first = Board::new().with_mark(Position::Center, Player::O);
        let second = first
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopRight, Player::O);
        let state = GameState::from_parts(
            vec![
                MoveRecord::initial(),
                MoveRecord::after_move(first, Position::Center),
                MoveRecord::after_move(second, Position::TopRight),
            ],
            2,
        );

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(InitialRecordInvariant::holds(&state));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (InitialRecordInvariant, SingleCellDeltaInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new("marks alternate");
        assert_eq!(violation.to_string(), "Invariant violation: marks alternate");
    }
}
