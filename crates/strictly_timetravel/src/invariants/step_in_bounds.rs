//! Current step always names a recorded snapshot.

use super::Invariant;
use crate::history::GameHistory;
use crate::snapshot::Snapshot;

/// Invariant: `current_step < snapshots.len()` and snapshot 0 is the empty start.
pub struct StepInBoundsInvariant;

impl Invariant<GameHistory> for StepInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots().first() == Some(&Snapshot::initial())
            && game.current_step() < game.snapshots().len()
    }

    fn description() -> &'static str {
        "Current step names a recorded snapshot and history starts empty"
    }
}
