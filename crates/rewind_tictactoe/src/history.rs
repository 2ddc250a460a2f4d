//! Move records kept for time travel.

use super::{Board, Location, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One snapshot in the game history.
///
/// The first record of every history holds the empty board and
/// no location; every later record holds the board right after
/// the move at `location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Board after the move.
    board: Board,
    /// Where the move was played, `None` for the opening record.
    location: Option<Location>,
}

impl MoveRecord {
    /// The opening record: empty board, no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// A record for a move at `pos` producing `board`.
    pub fn after_move(board: Board, pos: Position) -> Self {
        Self {
            board,
            location: Some(Location::from(pos)),
        }
    }

    /// The board position of the move, if this is not the opening record.
    pub fn position(&self) -> Option<Position> {
        self.location.and_then(Location::position)
    }
}

impl Default for MoveRecord {
    fn default() -> Self {
        Self::initial()
    }
}
