//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, columns left to right, then the main diagonal and the
/// anti-diagonal. When a constructed board completes several lines at once,
/// the first one in this order is the one reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player holding all three cells.
    pub player: Player,
    /// The three cells of the line, in line order.
    pub cells: [Position; 3],
}

impl WinningLine {
    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.cells.map(Position::to_index)
    }
}

/// Finds the first completed line on the board.
///
/// Returns `None` if no line holds three identical marks.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinningLine {
                player,
                cells: [a, b, c],
            })
        }
        _ => None,
    })
}
