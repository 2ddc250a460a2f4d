//! Rewind tic-tac-toe - pure game logic with time travel.
//!
//! # Architecture
//!
//! - **Types**: players, squares, boards and positions
//! - **Rules**: win and draw detection on a single board
//! - **State**: immutable history of snapshots with a step pointer
//! - **Invariants**: checkable properties of every reachable state
//! - **Game**: controller replacing its state on each accepted action
//! - **View**: display model rebuilt from state for any shell
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 7, 2] {
//!     game.click_square(index).unwrap();
//! }
//! assert_eq!(game.state().status(), GameStatus::Winner(Player::X));
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.state().status(), GameStatus::Turn(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use error::{InvalidStep, MoveError};
pub use game::Game;
pub use history::MoveRecord;
pub use position::{Location, Position};
pub use rules::{WinResult, check_winner, evaluate};
pub use state::{GameState, GameStatus, SortOrder};
pub use types::{Board, Player, Square};
pub use view::{CellView, GameView, MoveEntry};
