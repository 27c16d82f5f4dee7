//! Parsing of interactive session commands.

use derive_more::{Display, Error};
use std::str::FromStr;

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play the next mark at a cell index.
    Move(usize),
    /// Jump to a recorded step.
    Jump(usize),
    /// Flip the move list order.
    ToggleOrder,
    /// Start over from the empty board.
    Reset,
    /// Show the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  <0-8> | move <0-8>   place the next mark
  jump <step>          go to a recorded step
  order                reverse the move list
  reset                start a new game
  help                 show this summary
  quit                 leave";

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{}': {}", input, reason)]
pub struct InputError {
    /// The offending line.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl InputError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

fn number(line: &str, arg: Option<&str>) -> Result<usize, InputError> {
    arg.ok_or_else(|| InputError::new(line, "missing number"))?
        .parse()
        .map_err(|_| InputError::new(line, "expected a non-negative number"))
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(InputError::new(line, "empty command"));
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(InputError::new(line, "too many arguments"));
        }

        let input = match head.to_lowercase().as_str() {
            "move" | "m" => Input::Move(number(line, arg)?),
            "jump" | "j" => Input::Jump(number(line, arg)?),
            "order" | "o" | "sort" if arg.is_none() => Input::ToggleOrder,
            "reset" | "r" if arg.is_none() => Input::Reset,
            "help" | "h" | "?" if arg.is_none() => Input::Help,
            "quit" | "q" | "exit" if arg.is_none() => Input::Quit,
            _ if arg.is_none() => Input::Move(number(line, Some(head))?),
            _ => return Err(InputError::new(line, "unknown command")),
        };
        Ok(input)
    }
}
