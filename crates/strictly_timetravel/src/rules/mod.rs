//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. They never look at history, so the
//! engine can evaluate any snapshot it lands on after time travel.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, WinningLine, detect_winner};
