//! Strictly Timetravel - tic-tac-toe with full move history.
//!
//! The engine keeps every board position as an immutable snapshot and a
//! pointer to the one being shown. A view layer drives it with three input
//! events and re-reads four derived views after each one.
//!
//! # Architecture
//!
//! - **Rules**: pure win and tie detection over a single board
//! - **History**: the snapshot list, move validation and time travel
//! - **Invariants**: composable checks over a recorded history
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameHistory, GameStatus, Player};
//!
//! # fn example() -> Result<(), strictly_timetravel::HistoryError> {
//! let mut game = GameHistory::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! game.jump_to(1)?;
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod types;
mod view;

pub use error::HistoryError;
pub use history::{GameHistory, MoveOutcome};
pub use invariants::{
    HistoryInvariants, Invariant, InvariantSet, InvariantViolation, SnapshotChainInvariant,
    StepInBoundsInvariant, TerminalFrontierInvariant,
};
pub use move_list::{MoveEntry, MoveOrder};
pub use position::Position;
pub use rules::{WinningLine, detect_winner};
pub use snapshot::Snapshot;
pub use status::GameStatus;
pub use types::{Board, Cell, Player};
pub use view::GameView;
