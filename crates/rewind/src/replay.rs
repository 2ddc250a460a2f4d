//! Headless replay of a move list.

use anyhow::{Context, Result};
use rewind_tictactoe::{Game, GameView, Position, SortOrder};
use tracing::{info, instrument, warn};

/// Options for a replay run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplayOptions {
    /// Cell indices to click, in order.
    pub moves: Vec<usize>,
    /// Step to show once all moves are in.
    pub jump: Option<usize>,
    /// List moves newest first.
    pub descending: bool,
}

/// Clicks each index in turn and returns the resulting game.
///
/// Clicks the board would ignore (taken squares, play after a win, indices
/// off the board) are logged and skipped. A jump outside the history is an
/// error.
#[instrument(skip_all, fields(moves = opts.moves.len(), jump = ?opts.jump))]
pub fn replay(opts: &ReplayOptions) -> Result<Game> {
    let order = if opts.descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    let mut game = Game::with_sort_order(order);

    for (n, &index) in opts.moves.iter().enumerate() {
        if let Err(e) = game.click_square(index) {
            warn!(move_number = n + 1, index, error = %e, "Skipping rejected move");
        }
    }

    if let Some(step) = opts.jump {
        game.jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    info!(step = game.state().step(), status = %game.state().status(), "Replay finished");
    Ok(game)
}

/// Formats a view as plain text: status, board, move list.
///
/// Winning squares are wrapped in brackets and the current entry is
/// marked with an arrow.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(view.status_text());
    out.push_str("\n\n");

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_row_col(row, col))
            .map(|pos| {
                let cell = view.cell(pos);
                let mark = match cell.square.player() {
                    Some(_) => cell.square.mark().to_string(),
                    None => (pos.to_index() + 1).to_string(),
                };
                if cell.highlighted {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(view.sort_label());
    out.push('\n');
    for entry in view.moves() {
        let marker = if entry.is_current { "->" } else { "  " };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step, entry.label));
    }
    out
}

/// Renders a view as pretty JSON.
pub fn render_json(view: &GameView) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize view")
}
