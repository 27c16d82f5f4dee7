//! Single read-out of everything a view layer draws.

use crate::history::GameHistory;
use crate::move_list::{MoveEntry, MoveOrder};
use crate::position::Position;
use crate::status::GameStatus;
use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Snapshot of the engine's derived views, taken after an input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Status at the current step.
    status: GameStatus,
    /// Completed line at the current step, or empty.
    winning_cells: Vec<Position>,
    /// Current step.
    current_step: usize,
    /// Move list order used for `moves`.
    move_order: MoveOrder,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
}

impl From<&GameHistory> for GameView {
    fn from(game: &GameHistory) -> Self {
        Self {
            board: *game.current_board(),
            status: game.status(),
            winning_cells: game.winning_cells(),
            current_step: game.current_step(),
            move_order: game.move_order(),
            moves: game.move_list(),
        }
    }
}
