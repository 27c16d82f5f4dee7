//! Interactive play session driving a [`GameHistory`].

use crate::config::SessionConfig;
use crate::input::{HELP, Input};
use crate::render::render;
use std::io::{BufRead, Write};
use strictly_timetravel::{GameHistory, GameView, HistoryError};
use tracing::{debug, info, instrument, warn};

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Redraw and read the next line.
    Continue,
    /// Print the help text, then read the next line.
    ShowHelp,
    /// Stop the session.
    Quit,
}

/// One game session: the engine plus presentation settings.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameHistory,
    config: SessionConfig,
}

impl Session {
    /// Creates a session at the empty board.
    #[instrument(skip(config))]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: GameHistory::with_move_order(*config.move_order()),
            config,
        }
    }

    /// The engine behind this session.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Forwards one input event to the engine.
    ///
    /// # Errors
    ///
    /// Returns the engine's contract violation for an off-board cell or an
    /// unrecorded step. The session stays usable.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Result<Flow, HistoryError> {
        match input {
            Input::Move(index) => {
                let outcome = self.game.apply_move(index)?;
                debug!(?outcome, "Move handled");
            }
            Input::Jump(step) => self.game.jump_to(step)?,
            Input::ToggleOrder => self.game.toggle_move_order(),
            Input::Reset => {
                self.game.reset();
                // Reset keeps the configured starting order.
                if self.game.move_order() != *self.config.move_order() {
                    self.game.toggle_move_order();
                }
            }
            Input::Help => return Ok(Flow::ShowHelp),
            Input::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Renders the current view as text.
    pub fn render(&self) -> String {
        render(&self.game.view(), &self.config)
    }

    /// Reads commands line by line until `quit` or end of input.
    ///
    /// Bad input and contract violations are reported on `output` and the
    /// loop continues.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        info!("Session started");
        writeln!(output, "{}\n\n{}", HELP, self.render())?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let parsed = match line.parse::<Input>() {
                Ok(parsed) => parsed,
                Err(e) => {
                    debug!(error = %e, "Bad input");
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };
            match self.handle(parsed) {
                Ok(Flow::Continue) => writeln!(output, "\n{}", self.render())?,
                Ok(Flow::ShowHelp) => writeln!(output, "{}", HELP)?,
                Ok(Flow::Quit) => break,
                Err(e) => {
                    warn!(error = %e, "Engine rejected input");
                    writeln!(output, "Error: {}", e)?;
                }
            }
        }
        info!(steps = self.game.snapshots().len(), "Session ended");
        Ok(())
    }
}

/// Applies `moves` in order, then optionally jumps, and returns the final view.
///
/// # Errors
///
/// Fails on the first off-board cell or unrecorded step.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<GameView, HistoryError> {
    let mut game = GameHistory::new();
    for &index in moves {
        let outcome = game.apply_move(index)?;
        debug!(index, ?outcome, "Replayed move");
    }
    if let Some(step) = jump {
        game.jump_to(step)?;
    }
    Ok(game.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timetravel::{GameStatus, MoveOrder, Player};

    #[test]
    fn test_handle_forwards_events() {
        let mut session = Session::new(SessionConfig::default());
        assert_eq!(session.handle(Input::Move(4)), Ok(Flow::Continue));
        assert_eq!(session.handle(Input::Move(0)), Ok(Flow::Continue));
        assert_eq!(session.handle(Input::Jump(1)), Ok(Flow::Continue));
        assert_eq!(session.game().current_step(), 1);
        assert_eq!(session.handle(Input::ToggleOrder), Ok(Flow::Continue));
        assert_eq!(session.game().move_order(), MoveOrder::Descending);
        assert_eq!(session.handle(Input::Help), Ok(Flow::ShowHelp));
        assert_eq!(session.handle(Input::Quit), Ok(Flow::Quit));
    }

    #[test]
    fn test_handle_reports_contract_violations() {
        let mut session = Session::new(SessionConfig::default());
        assert_eq!(
            session.handle(Input::Move(9)),
            Err(HistoryError::CellOutOfRange(9))
        );
        assert_eq!(
            session.handle(Input::Jump(1)),
            Err(HistoryError::StepOutOfRange { step: 1, len: 1 })
        );
    }

    #[test]
    fn test_reset_keeps_configured_order() {
        let config = SessionConfig::new(MoveOrder::Descending, true, true);
        let mut session = Session::new(config);
        session.handle(Input::Move(4)).expect("valid move");
        session.handle(Input::ToggleOrder).expect("toggle");
        session.handle(Input::Reset).expect("reset");
        assert_eq!(session.game().snapshots().len(), 1);
        assert_eq!(session.game().move_order(), MoveOrder::Descending);
    }

    #[test]
    fn test_replay_with_jump() {
        let view = replay(&[0, 4, 1, 3, 2], Some(1)).expect("valid replay");
        assert_eq!(*view.status(), GameStatus::InProgress { next: Player::O });
        assert_eq!(view.moves().len(), 6);
    }

    #[test]
    fn test_replay_rejects_bad_step() {
        assert!(replay(&[0], Some(5)).is_err());
    }
}
