//! The circular pit sequence.
//!
//! ## Layout
//!
//! For `B` bowls per player the board has `2 * (B + 1)` pits:
//!
//! | indices        | owner  | kind  |
//! |----------------|--------|-------|
//! | `0..B`         | first  | bowls |
//! | `B`            | first  | store |
//! | `B+1..2B+1`    | second | bowls |
//! | `2B+1`         | second | store |
//!
//! Sowing walks the indices upwards and wraps at the end.

mod pit;

pub use pit::{Pit, PitKind};

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::core::Seat;

/// An ordered, circularly indexed sequence of pits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: Vec<Pit>,
    bowls_per_player: usize,
}

impl Board {
    /// Create a board with `beads_per_bowl` in every bowl and empty stores.
    #[must_use]
    pub fn new(beads_per_bowl: usize, bowls_per_player: usize) -> Self {
        assert!(bowls_per_player > 0, "Must have at least 1 bowl per player");

        let side = bowls_per_player + 1;
        let pits = (0..2 * side)
            .map(|i| {
                if i % side == bowls_per_player {
                    Pit::store()
                } else {
                    Pit::bowl(beads_per_bowl)
                }
            })
            .collect();

        Self {
            pits,
            bowls_per_player,
        }
    }

    /// Build a board from raw bead counts, e.g. `[3, 3, 3, 0, 3, 3, 3, 0]`.
    ///
    /// The layout is inferred from the length, which must be even and at
    /// least 4.
    #[must_use]
    pub fn from_counts(counts: &[usize]) -> Self {
        assert!(
            counts.len() >= 4 && counts.len() % 2 == 0,
            "Board needs an even number of pits, at least 4"
        );

        let mut board = Self::new(0, counts.len() / 2 - 1);
        for (pit, &beads) in board.pits.iter_mut().zip(counts) {
            pit.beads = beads;
        }
        board
    }

    /// Number of pits, stores included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pits.len()
    }

    /// Always false; a board has at least four pits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pits.is_empty()
    }

    #[must_use]
    pub fn bowls_per_player(&self) -> usize {
        self.bowls_per_player
    }

    /// Get the pit at `index`. Panics if out of range.
    #[must_use]
    pub fn pit(&self, index: usize) -> &Pit {
        &self.pits[index]
    }

    #[must_use]
    pub fn pits(&self) -> &[Pit] {
        &self.pits
    }

    #[must_use]
    pub fn beads(&self, index: usize) -> usize {
        self.pits[index].beads
    }

    #[must_use]
    pub fn kind(&self, index: usize) -> PitKind {
        self.pits[index].kind
    }

    #[must_use]
    pub fn is_bowl(&self, index: usize) -> bool {
        !self.pits[index].is_store()
    }

    /// Bead counts in pit order.
    #[must_use]
    pub fn bead_counts(&self) -> Vec<usize> {
        self.pits.iter().map(|p| p.beads).collect()
    }

    /// Total beads on the board.
    #[must_use]
    pub fn total_beads(&self) -> usize {
        self.pits.iter().map(|p| p.beads).sum()
    }

    /// Add beads to a pit, returning its new count.
    pub fn add_beads(&mut self, index: usize, beads: usize) -> usize {
        let pit = &mut self.pits[index];
        pit.beads += beads;
        pit.beads
    }

    /// Empty a pit, returning the beads it held.
    pub fn take_beads(&mut self, index: usize) -> usize {
        std::mem::take(&mut self.pits[index].beads)
    }

    /// The contiguous pit range a seat owns; its last index is the store.
    #[must_use]
    pub fn owned_range(&self, seat: Seat) -> Range<usize> {
        let half = self.len() / 2;
        match seat {
            Seat::First => 0..half,
            Seat::Second => half..self.len(),
        }
    }

    /// The ordinary bowls a seat owns.
    #[must_use]
    pub fn bowl_range(&self, seat: Seat) -> Range<usize> {
        let owned = self.owned_range(seat);
        owned.start..owned.end - 1
    }

    #[must_use]
    pub fn store_index(&self, seat: Seat) -> usize {
        self.owned_range(seat).end - 1
    }

    /// The bowl directly across the board from `index`.
    #[must_use]
    pub fn opposite(&self, index: usize) -> usize {
        self.len() - 2 - index
    }
}

/// Two-row grid: the first seat's store and bowls on top (right to left),
/// the second seat's bowls and store below (left to right).
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bowls = self.bowls_per_player;
        let blank = "    ";

        let outer = format!("{}+", "+----".repeat(bowls + 2));
        let inner = format!("+{blank}+{}{blank}+", "----+".repeat(bowls));

        let mut top = String::from("|");
        for i in (0..=bowls).rev() {
            top.push_str(&format!("{:^4}|", self.beads(i)));
        }
        top.push_str(blank);
        top.push('|');

        let mut bottom = format!("|{blank}|");
        for i in bowls + 1..self.len() {
            bottom.push_str(&format!("{:^4}|", self.beads(i)));
        }

        writeln!(f, "{outer}")?;
        writeln!(f, "{top}")?;
        writeln!(f, "{inner}")?;
        writeln!(f, "{bottom}")?;
        writeln!(f, "{outer}")
    }
}
