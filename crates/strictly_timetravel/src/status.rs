//! Game status derived from the current snapshot.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// State of the game at the current step.
///
/// Never stored; recomputed from the current board on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {}", next)]
    InProgress {
        /// Player due to move.
        next: Player,
    },
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Board is full with no completed line.
    #[display("Match tied")]
    Tied,
}

impl GameStatus {
    /// Returns true when no further move is accepted at this step.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}
