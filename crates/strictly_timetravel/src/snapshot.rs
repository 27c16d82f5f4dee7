//! Immutable board snapshots.

use crate::position::Position;
use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One recorded point in the game: a board and the move that produced it.
///
/// The initial snapshot has no location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Cell played to reach this board.
    #[getter(skip)]
    location: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }

    /// Cell played to reach this board, `None` for the starting board.
    pub fn location(&self) -> Option<Position> {
        self.location
    }
}
