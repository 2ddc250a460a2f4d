//! Rewind - terminal tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **CLI**: `play` opens the terminal UI, `replay` prints a view headlessly
//! - **Config**: TOML settings for logging and initial move-list order
//! - **TUI**: ratatui shell drawing the game view and routing keys
//!
//! Game rules, history and the view model live in `rewind_tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use replay::{ReplayOptions, render_json, render_text, replay};
