//! Contract violations reported by the history engine.

/// A caller passed data the engine never produced itself.
///
/// Blocked-but-legal game actions (an occupied cell, a finished game) are not
/// errors; see [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The cell index is not on the board.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// The step does not name a recorded snapshot.
    #[display("Step {} is out of range (history has {} snapshots)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}
