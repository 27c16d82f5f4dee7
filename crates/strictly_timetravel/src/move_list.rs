//! Presentation of the recorded history as a navigable move list.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Order in which moves after the game start are listed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl MoveOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// One entry of the move list; selecting it jumps to `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    pub step: usize,
    /// Cell played at this step, `None` for the game start.
    pub location: Option<Position>,
    /// Whether this is the snapshot currently shown.
    pub is_current: bool,
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.location {
            Some(pos) if self.step > 0 => {
                write!(f, "Go to move {} ({}, {})", self.step, pos.row(), pos.col())
            }
            _ => write!(f, "Go to game start"),
        }
    }
}
