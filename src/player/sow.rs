//! The sowing engine.
//!
//! One sow empties the start bowl and drops its beads one at a time into
//! the following pits, wrapping at the end of the board and stepping over
//! the opponent's store. Where the last bead lands decides what happens
//! next:
//!
//! - the mover's own store, which was empty: an extra turn
//! - one of the mover's own bowls, which was empty, without the sow having
//!   lapped the board: a capture of that bead plus the opposite bowl
//! - anywhere else: nothing further
//!
//! Extra turns chain: the mover selects a fresh bowl and sows again until a
//! sow ends some other way or no legal bowl remains.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::Player;
use crate::board::Board;
use crate::core::{GameRng, MoveError};

/// What the last bead of a sow triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// Landed anywhere without a special effect.
    Plain,
    /// Landed in the mover's previously empty store.
    ExtraTurn,
    /// Landed in the mover's previously empty bowl; `opposite` was emptied
    /// and `beads` (including the landing bead) moved to the store.
    Capture { opposite: usize, beads: usize },
}

/// The result of a single distribution of beads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowReport {
    /// Bowl the beads were taken from.
    pub start: usize,
    /// Number of beads distributed.
    pub sown: usize,
    /// Pit that received the last bead.
    pub last: usize,
    pub landing: Landing,
}

/// Every sow made during one turn, extra turns included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub sows: SmallVec<[SowReport; 2]>,
    /// Whether the mover still has a non-empty bowl afterwards.
    pub continues: bool,
}

impl TurnReport {
    /// Number of extra turns granted during this turn.
    #[must_use]
    pub fn extra_turns(&self) -> usize {
        self.sows
            .iter()
            .filter(|s| s.landing == Landing::ExtraTurn)
            .count()
    }
}

impl Player {
    /// Check that `start` is a non-empty bowl this player owns.
    pub fn check_start(&self, board: &Board, start: usize) -> Result<(), MoveError> {
        if start >= board.len() {
            return Err(MoveError::OutOfBounds {
                index: start,
                len: board.len(),
            });
        }
        if !self.owns(start) {
            return Err(MoveError::NotOwned {
                index: start,
                seat: self.seat(),
            });
        }
        if !board.is_bowl(start) {
            return Err(MoveError::Store(start));
        }
        if board.beads(start) == 0 {
            return Err(MoveError::EmptyBowl(start));
        }
        Ok(())
    }

    /// Distribute the beads of `start` once, applying a capture if one is
    /// triggered. Extra turns are reported but not taken.
    pub fn sow_once(&self, board: &mut Board, start: usize) -> Result<SowReport, MoveError> {
        self.check_start(board, start)?;
        Ok(self.distribute(board, start))
    }

    /// Sow from `start`, then keep taking extra turns while they are
    /// granted. Returns whether this player still has a legal move.
    pub fn sow(&self, board: &mut Board, start: usize, rng: &mut GameRng) -> Result<bool, MoveError> {
        self.play_from(board, start, rng).map(|turn| turn.continues)
    }

    /// Like [`Player::sow`], but returns every sow made.
    pub fn play_from(
        &self,
        board: &mut Board,
        start: usize,
        rng: &mut GameRng,
    ) -> Result<TurnReport, MoveError> {
        self.check_start(board, start)?;
        Ok(self.resolve(board, start, rng))
    }

    /// Select a bowl with this player's strategy and sow it.
    ///
    /// Returns a report with no sows and `continues == false` when the
    /// player has no legal move.
    pub fn take_turn(&self, board: &mut Board, rng: &mut GameRng) -> TurnReport {
        match self.select_start(board, rng) {
            Some(start) => self.resolve(board, start, rng),
            None => TurnReport::default(),
        }
    }

    // `start` must already be a legal bowl for this player.
    fn resolve(&self, board: &mut Board, start: usize, rng: &mut GameRng) -> TurnReport {
        let mut turn = TurnReport::default();
        let mut report = self.distribute(board, start);
        turn.sows.push(report);

        while report.landing == Landing::ExtraTurn {
            let Some(next) = self.select_start(board, rng) else {
                break;
            };
            debug!(seat = %self.seat(), next, "extra turn");
            report = self.distribute(board, next);
            turn.sows.push(report);
        }

        turn.continues = self.has_legal_move(board);
        turn
    }

    fn distribute(&self, board: &mut Board, start: usize) -> SowReport {
        let len = board.len();
        let own_store = board.store_index(self.seat());
        let opponent_store = board.store_index(self.seat().other());

        let sown = board.take_beads(start);
        let mut remaining = sown;
        // Unwrapped walk position; `pos >= len` means the sow lapped the board.
        let mut pos = start;
        while remaining > 0 {
            pos += 1;
            let index = pos % len;
            if index == opponent_store {
                continue;
            }
            board.add_beads(index, 1);
            remaining -= 1;
        }

        let last = pos % len;
        let was_empty = board.beads(last) == 1;
        let landing = if last == own_store && was_empty {
            Landing::ExtraTurn
        } else if was_empty && pos < len && self.owns(last) && board.is_bowl(last) {
            let opposite = board.opposite(last);
            let beads = board.take_beads(last) + board.take_beads(opposite);
            board.add_beads(own_store, beads);
            debug!(seat = %self.seat(), bowl = last, opposite, beads, "capture");
            Landing::Capture { opposite, beads }
        } else {
            Landing::Plain
        };

        debug!(seat = %self.seat(), start, sown, last, ?landing, "sow");
        SowReport {
            start,
            sown,
            last,
            landing,
        }
    }
}
