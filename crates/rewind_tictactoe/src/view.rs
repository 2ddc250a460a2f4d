//! Display model derived from game state.
//!
//! The view is rebuilt from scratch after every transition. Shells only
//! draw it; they never patch it.

use super::state::{GameState, GameStatus};
use super::{Position, Square};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One board cell as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_new::new)]
pub struct CellView {
    /// Where the cell sits.
    pub position: Position,
    /// What occupies it.
    pub square: Square,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_new::new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// This entry is the displayed snapshot.
    pub is_current: bool,
}

/// Everything a shell needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Cells in row-major order.
    cells: [CellView; 9],
    /// Status of the displayed board.
    status: GameStatus,
    /// Status line text.
    status_text: String,
    /// Text of the sort-order toggle.
    #[getter(skip)]
    sort_label: &'static str,
    /// Move list in presentation order.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Renders the display model for `state`.
    #[instrument(skip(state), fields(step = state.step(), len = state.history().len()))]
    pub fn render(state: &GameState) -> Self {
        let winner = state.winner();
        let board = state.board();
        let cells = Position::ALL.map(|pos| {
            let highlighted = winner.is_some_and(|w| w.contains(pos));
            CellView::new(pos, board.get(pos), highlighted)
        });

        let status = state.status();
        let sort_order = state.sort_order();
        let sort_label = if sort_order.is_ascending() {
            "Sort Moves Descending"
        } else {
            "Sort Moves Ascending"
        };

        let mut moves: Vec<MoveEntry> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, record)| {
                let is_current = step == state.step();
                let label = match (is_current, record.location()) {
                    (true, _) => format!("You are at move #{}", step),
                    (false, Some(location)) => format!("Go to move #{} {}", step, location),
                    (false, None) => "Go to game start".to_string(),
                };
                MoveEntry::new(step, label, is_current)
            })
            .collect();
        if !sort_order.is_ascending() {
            moves.reverse();
        }

        Self {
            cells,
            status,
            status_text: status.to_string(),
            sort_label,
            moves,
        }
    }

    /// Text of the sort-order toggle.
    pub fn sort_label(&self) -> &'static str {
        self.sort_label
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }

    /// Positions drawn highlighted.
    pub fn highlighted(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.position)
            .collect()
    }

    /// Index into [`moves`](Self::moves) of the current entry.
    pub fn current_entry(&self) -> Option<usize> {
        self.moves.iter().position(|entry| entry.is_current)
    }
}
