//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, SeatMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Seat),
    /// Equal bead totals.
    Draw,
}

impl GameResult {
    /// Decide the result from each seat's total beads (store plus bowls).
    ///
    /// Strictly more beads wins; equal totals draw.
    #[must_use]
    pub fn from_totals(totals: &SeatMap<usize>) -> Self {
        let first = totals[Seat::First];
        let second = totals[Seat::Second];
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(Seat::First),
            std::cmp::Ordering::Less => GameResult::Winner(Seat::Second),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self {
            GameResult::Winner(s) => Some(*s),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(seat) => write!(f, "{seat} wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}
