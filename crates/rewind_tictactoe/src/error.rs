//! Errors for rejected game actions.
//!
//! A rejected action never changes state. Shells that mirror the
//! classic click-driven board simply ignore these.

use super::{Player, Position};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over, {} won", _0)]
    GameOver(Player),

    /// A raw cell index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// A time-travel target that does not index the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Step {} is out of range, history has {} records", step, len)]
pub struct InvalidStep {
    /// The requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}

impl std::error::Error for InvalidStep {}
