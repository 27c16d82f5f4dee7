//! Terminal frontier invariant: nothing is recorded past a finished game.

use super::Invariant;
use crate::history::GameHistory;
use crate::rules::{detect_winner, is_full};

/// Invariant: only the last snapshot may be a win or a full board.
pub struct TerminalFrontierInvariant;

impl Invariant<GameHistory> for TerminalFrontierInvariant {
    fn holds(game: &GameHistory) -> bool {
        let snapshots = game.snapshots();
        snapshots
            .iter()
            .take(snapshots.len().saturating_sub(1))
            .all(|s| detect_winner(s.board()).is_none() && !is_full(s.board()))
    }

    fn description() -> &'static str {
        "No snapshot follows a won or full board"
    }
}
