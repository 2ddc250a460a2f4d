//! Game controller owning the current state.

use super::error::{InvalidStep, MoveError};
use super::state::{GameState, SortOrder};
use super::view::GameView;
use super::Position;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Holds one [`GameState`] and replaces it wholesale on every accepted
/// action. A rejected action leaves the state untouched and hands the
/// reason back, so a shell can ignore it the way a board ignores a click
/// on a taken square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Creates a new game listing moves in the given order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            state: GameState::with_sort_order(sort_order),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays the next mark at `pos`.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        match self.state.apply_move(pos) {
            Ok(next) => {
                self.state = next;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                Err(e)
            }
        }
    }

    /// Plays at a raw board index (0-8).
    #[instrument(skip(self))]
    pub fn click_square(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            debug!("Index outside the board");
            MoveError::OutOfBounds(index)
        })?;
        self.play(pos)
    }

    /// Shows the snapshot at `step`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), InvalidStep> {
        match self.state.jump_to(step) {
            Ok(next) => {
                self.state = next;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "Jump ignored");
                Err(e)
            }
        }
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.state = self.state.toggle_sort_order();
    }

    /// Starts over at the empty board, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = GameState::with_sort_order(self.state.sort_order());
    }

    /// Builds the display model for the current state.
    pub fn view(&self) -> GameView {
        GameView::render(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Player};

    #[test]
    fn test_rejected_move_is_noop() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_click_out_of_bounds() {
        let mut game = Game::new();
        assert_eq!(game.click_square(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_invalid_jump_is_noop() {
        let mut game = Game::new();
        game.click_square(0).unwrap();
        let before = game.clone();
        assert!(game.jump_to(5).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_restart_keeps_sort_order() {
        let mut game = Game::with_sort_order(SortOrder::Descending);
        game.click_square(4).unwrap();
        game.restart();
        assert_eq!(game.state().history().len(), 1);
        assert_eq!(game.state().sort_order(), SortOrder::Descending);
        assert_eq!(game.state().status(), GameStatus::Turn(Player::X));
    }
}
