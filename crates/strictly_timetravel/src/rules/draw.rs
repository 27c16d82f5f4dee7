//! Tie detection logic for tic-tac-toe.

use super::win::detect_winner;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && detect_winner(board).is_none()
}
