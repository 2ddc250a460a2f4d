//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{Game, GameView, Position, SortOrder};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading keys.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    view: GameView,
    cursor: Position,
    focus: Focus,
    /// Index into the displayed move list.
    selected: usize,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        let game = Game::with_sort_order(sort_order);
        let view = game.view();
        Self {
            game,
            view,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Display model for the current state.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => {
                self.game.toggle_sort_order();
                self.refresh();
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.refresh();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            code => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.play(pos);
                } else {
                    self.navigate(code);
                }
            }
        }
        Control::Continue
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Board => self.play(self.cursor),
            Focus::History => {
                if let Some(entry) = self.view.moves().get(self.selected) {
                    let step = entry.step;
                    // Entries always index the history.
                    if self.game.jump_to(step).is_ok() {
                        debug!(step, "Jumped");
                    }
                    self.refresh();
                }
            }
        }
    }

    fn play(&mut self, pos: Position) {
        // Rejected moves leave the game untouched.
        if self.game.play(pos).is_ok() {
            debug!(position = %pos, "Mark placed");
        }
        self.refresh();
    }

    fn navigate(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, key),
            Focus::History => {
                let last = self.view.moves().len().saturating_sub(1);
                self.selected = match key {
                    KeyCode::Up => self.selected.saturating_sub(1),
                    KeyCode::Down => (self.selected + 1).min(last),
                    KeyCode::Home => 0,
                    KeyCode::End => last,
                    _ => self.selected,
                };
            }
        }
    }

    /// Rebuilds the view and puts the list selection on the current entry.
    fn refresh(&mut self) {
        self.view = self.game.view();
        self.selected = self.view.current_entry().unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Control::Continue);
        }
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.game().state().board().get(Position::TopLeft).player(), Some(Player::X));
        assert_eq!(app.view().status_text(), "Next player: O");
    }

    #[test]
    fn test_digits_play_directly() {
        let mut app = App::new(SortOrder::Ascending);
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('5'),
                KeyCode::Char('2'),
                KeyCode::Char('8'),
                KeyCode::Char('3'),
            ],
        );
        assert_eq!(app.game().state().status(), GameStatus::Winner(Player::X));
        // Ignored once the game is won.
        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.game().state().history().len(), 6);
    }

    #[test]
    fn test_history_focus_jumps() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.selected(), 2);

        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().state().step(), 0);
        assert_eq!(app.game().state().history().len(), 3);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_sort_toggle_keeps_selection_on_current() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('s')]);
        assert_eq!(app.game().state().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);
        assert_eq!(app.view().moves()[0].step, 1);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('r')]);
        assert_eq!(app.game().state().history().len(), 1);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    }
}
