//! Start-bowl selection strategies.
//!
//! Selection is a pure function of the board and the bowls a player owns;
//! the only side effect is drawing from the supplied RNG to break ties.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Range;

use crate::board::Board;
use crate::core::{ConfigError, GameRng};

/// Candidate bowl indices. Inline for the standard six bowls per player.
type Candidates = SmallVec<[usize; 8]>;

/// How a player picks the bowl to sow from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniformly random among non-empty bowls.
    UniformRandom,
    /// Uniformly random among the bowls holding the most beads.
    GreedyMax,
}

impl Strategy {
    /// Parse the numeric code used by the prompt layer (1 or 2).
    pub fn from_code(code: u8) -> Result<Self, ConfigError> {
        match code {
            1 => Ok(Strategy::UniformRandom),
            2 => Ok(Strategy::GreedyMax),
            other => Err(ConfigError::UnknownStrategy(other)),
        }
    }

    /// The numeric code for this strategy.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Strategy::UniformRandom => 1,
            Strategy::GreedyMax => 2,
        }
    }

    /// Pick a start bowl from `owned`, or `None` when every owned bowl is empty.
    ///
    /// Stores inside `owned` are never candidates.
    pub fn select(self, board: &Board, owned: Range<usize>, rng: &mut GameRng) -> Option<usize> {
        let candidates = match self {
            Strategy::UniformRandom => non_empty_bowls(board, owned),
            Strategy::GreedyMax => fullest_bowls(board, owned),
        };
        rng.choose(&candidates).copied()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::UniformRandom => f.write_str("uniform-random"),
            Strategy::GreedyMax => f.write_str("greedy-max"),
        }
    }
}

fn non_empty_bowls(board: &Board, owned: Range<usize>) -> Candidates {
    owned
        .filter(|&i| board.is_bowl(i) && board.beads(i) > 0)
        .collect()
}

/// All bowls tied at the maximum count. Empty if that maximum is zero.
fn fullest_bowls(board: &Board, owned: Range<usize>) -> Candidates {
    let mut max = 0;
    let mut tied = Candidates::new();
    for i in owned.filter(|&i| board.is_bowl(i)) {
        let beads = board.beads(i);
        if beads > max {
            max = beads;
            tied.clear();
        }
        if beads == max && beads > 0 {
            tied.push(i);
        }
    }
    tied
}
