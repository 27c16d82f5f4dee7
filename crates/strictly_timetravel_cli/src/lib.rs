//! Terminal front end for the strictly_timetravel engine.
//!
//! The front end is a thin view layer: it parses a line into an input event,
//! forwards it to the engine, then re-reads and prints the engine's views.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, SessionConfig};
pub use input::{HELP, Input, InputError};
pub use render::{render, render_board, render_moves};
pub use session::{Flow, Session, replay};
