//! History-tracked game engine.
//!
//! The engine records every board as an immutable [`Snapshot`] and keeps an
//! index into that list. Undo and redo are plain index moves; playing a move
//! after stepping back discards the old future and starts a new branch.

use crate::error::HistoryError;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::move_list::{MoveEntry, MoveOrder};
use crate::position::Position;
use crate::rules::{detect_winner, is_full};
use crate::snapshot::Snapshot;
use crate::status::GameStatus;
use crate::types::{Board, Cell, Player};
use crate::view::GameView;
use tracing::{debug, info, instrument, warn};

/// Result of a well-formed move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded as snapshot `step`.
    Accepted {
        /// Index of the new snapshot.
        step: usize,
    },
    /// The move was blocked by the game rules (occupied cell or finished
    /// game). Nothing changed.
    Ignored,
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// Tic-tac-toe game with full move history and time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    current_step: usize,
    move_order: MoveOrder,
}

impl GameHistory {
    /// Creates a game at the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            current_step: 0,
            move_order: MoveOrder::default(),
        }
    }

    /// Creates a game whose move list starts in the given order.
    #[instrument]
    pub fn with_move_order(move_order: MoveOrder) -> Self {
        Self {
            move_order,
            ..Self::new()
        }
    }

    /// Returns to the starting board and forgets all recorded moves.
    #[instrument(skip(self), fields(discarded = self.snapshots.len() - 1))]
    pub fn reset(&mut self) {
        info!("Resetting game history");
        *self = Self::new();
    }

    /// Plays the next player's mark at board index `index` (0-8).
    ///
    /// Any snapshots after the current step are discarded first.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::CellOutOfRange`] if `index` is not on the
    /// board. A move on an occupied cell or after the game has ended is not an
    /// error; it returns [`MoveOutcome::Ignored`] and changes nothing.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, HistoryError> {
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "Rejected move outside the board");
            return Err(HistoryError::CellOutOfRange(index));
        };

        let board = *self.current_board();
        if let Some(line) = detect_winner(&board) {
            debug!(winner = %line.player, "Ignoring move after game end");
            return Ok(MoveOutcome::Ignored);
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Ignoring move on occupied cell");
            return Ok(MoveOutcome::Ignored);
        }
        if is_full(&board) {
            debug!("Ignoring move on full board");
            return Ok(MoveOutcome::Ignored);
        }

        let mover = self.next_player();
        let discarded = self.snapshots.len() - 1 - self.current_step;
        self.snapshots.truncate(self.current_step + 1);
        self.snapshots.push(Snapshot::new(
            board.with(pos, Cell::Occupied(mover)),
            Some(pos),
        ));
        self.current_step = self.snapshots.len() - 1;

        info!(
            position = %pos,
            player = %mover,
            new_step = self.current_step,
            discarded,
            "Move recorded"
        );
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated after move"
        );

        Ok(MoveOutcome::Accepted {
            step: self.current_step,
        })
    }

    /// Makes snapshot `step` the current one.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if no snapshot has that index.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        let len = self.snapshots.len();
        if step >= len {
            warn!(step, len, "Rejected jump outside recorded history");
            return Err(HistoryError::StepOutOfRange { step, len });
        }
        self.current_step = step;
        info!(step, "Jumped to step");
        Ok(())
    }

    /// Flips the order in which the move list is presented.
    #[instrument(skip(self), fields(order = %self.move_order))]
    pub fn toggle_move_order(&mut self) {
        self.move_order = self.move_order.toggled();
        debug!(order = %self.move_order, "Move order toggled");
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.snapshots[self.current_step].board()
    }

    /// Index of the snapshot being shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Player due to move at the current step.
    pub fn next_player(&self) -> Player {
        Player::for_move_count(self.current_step)
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Current move-list order.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// Status of the game at the current step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(line) = detect_winner(board) {
            GameStatus::Won(line.player)
        } else if is_full(board) {
            GameStatus::Tied
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Cells of the completed line at the current step, or empty.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn winning_cells(&self) -> Vec<Position> {
        detect_winner(self.current_board())
            .map(|line| line.cells.to_vec())
            .unwrap_or_default()
    }

    /// One entry per snapshot, ordered for display.
    ///
    /// The game-start entry is always first; the order of the remaining
    /// entries follows [`move_order`](Self::move_order).
    #[instrument(skip(self), fields(order = %self.move_order, len = self.snapshots.len()))]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .snapshots
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                location: snapshot.location(),
                is_current: step == self.current_step,
            })
            .collect();
        if self.move_order == MoveOrder::Descending {
            entries[1..].reverse();
        }
        entries
    }

    /// All four read-outs in one value.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
