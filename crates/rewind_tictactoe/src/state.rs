//! Game state with history and time travel.
//!
//! [`GameState`] is an immutable value: every transition borrows the
//! current state and returns a replacement. The player to move is
//! never stored, it is derived from the parity of the current step.

use super::error::{InvalidStep, MoveError};
use super::history::MoveRecord;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{self, WinResult};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether the oldest move is listed first.
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// Status of the displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The displayed board has a completed line.
    Winner(Player),
    /// All nine squares are filled with no line.
    Draw,
    /// The game continues; this player moves next.
    Turn(Player),
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Winner(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "The game is a draw!"),
            GameStatus::Turn(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// Complete game state: history, current step and move-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Snapshots, starting with the empty board.
    history: Vec<MoveRecord>,
    /// Index of the displayed snapshot.
    step: usize,
    /// Presentation order of the move list.
    sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            step: 0,
            sort_order,
        }
    }

    /// Assembles a state without checking it, for invariant tests.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<MoveRecord>, step: usize) -> Self {
        Self {
            history,
            step,
            sort_order: SortOrder::default(),
        }
    }

    /// All recorded snapshots, including any ahead of the current step.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.step]
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player to move, derived from step parity.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Winning line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        rules::evaluate(self.board())
    }

    /// Derives the status of the displayed board.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn status(&self) -> GameStatus {
        if let Some(result) = self.winner() {
            GameStatus::Winner(result.winner)
        } else if self.step == 9 {
            GameStatus::Draw
        } else {
            GameStatus::Turn(self.next_player())
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Any history after the current step is discarded before the new
    /// snapshot is appended.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the displayed board already has
    /// a winner, or [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        if let Some(result) = self.winner() {
            return Err(MoveError::GameOver(result.winner));
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let board = self.board().with_mark(pos, self.next_player());
        let mut history = self.history[..=self.step].to_vec();
        history.push(MoveRecord::after_move(board, pos));
        let next = Self {
            step: history.len() - 1,
            history,
            sort_order: self.sort_order,
        };

        debug!(
            truncated = self.history.len() - (self.step + 1),
            new_step = next.step,
            "Move applied"
        );
        debug_assert!(GameInvariants::check_all(&next).is_ok());
        Ok(next)
    }

    /// Moves the displayed snapshot to `step`.
    ///
    /// History is left intact, so later moves remain reachable until a
    /// new move is played.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStep`] if `step` does not index the history.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, InvalidStep> {
        if step >= self.history.len() {
            return Err(InvalidStep {
                step,
                len: self.history.len(),
            });
        }
        let next = Self {
            step,
            ..self.clone()
        };
        debug_assert!(GameInvariants::check_all(&next).is_ok());
        Ok(next)
    }

    /// Flips the move-list order. History and step are unchanged.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            sort_order: self.sort_order.toggle(),
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> GameState {
        indices.iter().fold(GameState::new(), |state, i| {
            state
                .apply_move(Position::from_index(*i).unwrap())
                .unwrap()
        })
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step(), 0);
        assert_eq!(state.status(), GameStatus::Turn(Player::X));
        assert_eq!(state.current().location(), &None);
    }

    #[test]
    fn test_move_records_location() {
        let state = play(&[5]);
        assert_eq!(state.step(), 1);
        assert_eq!(state.current().position(), Some(Position::MiddleRight));
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let state = play(&[4]);
        let err = state.apply_move(Position::Center).unwrap_err();
        assert_eq!(err, MoveError::SquareOccupied(Position::Center));
    }

    #[test]
    fn test_move_after_win_rejected() {
        let state = play(&[0, 4, 1, 7, 2]);
        assert_eq!(state.status(), GameStatus::Winner(Player::X));
        let err = state.apply_move(Position::BottomRight).unwrap_err();
        assert_eq!(err, MoveError::GameOver(Player::X));
    }

    #[test]
    fn test_jump_keeps_history() {
        let state = play(&[0, 4, 1]).jump_to(1).unwrap();
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.step(), 1);
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let state = play(&[0]);
        assert_eq!(state.jump_to(2), Err(InvalidStep { step: 2, len: 2 }));
    }

    #[test]
    fn test_move_after_jump_truncates() {
        let state = play(&[0, 1]).jump_to(0).unwrap();
        let state = state.apply_move(Position::Center).unwrap();
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.current().position(), Some(Position::Center));
    }

    #[test]
    fn test_toggle_sort_order_only_touches_order() {
        let state = play(&[0, 1]);
        let toggled = state.toggle_sort_order();
        assert_eq!(toggled.sort_order(), SortOrder::Descending);
        assert_eq!(toggled.history(), state.history());
        assert_eq!(toggled.step(), state.step());
        assert_eq!(toggled.toggle_sort_order(), state);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "The game is a draw!");
        assert_eq!(GameStatus::Turn(Player::X).to_string(), "Next player: X");
    }
}
