//! Snapshot chain invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::history::GameHistory;
use crate::types::{Cell, Player};

/// Invariant: snapshot `k` differs from snapshot `k - 1` in exactly one cell.
///
/// That cell goes from empty to the mover's mark (X on odd `k`, O on even `k`)
/// and is the snapshot's recorded location.
pub struct SnapshotChainInvariant;

impl Invariant<GameHistory> for SnapshotChainInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let mover = Player::for_move_count(i);
                let changed: Vec<usize> = (0..9)
                    .filter(|&idx| before.board().cell(idx) != after.board().cell(idx))
                    .collect();
                match (changed.as_slice(), after.location()) {
                    ([idx], Some(pos)) => {
                        *idx == pos.to_index()
                            && before.board().get(pos) == Cell::Empty
                            && after.board().get(pos) == Cell::Occupied(mover)
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the alternating mover at its location"
    }
}
