//! Game configuration.
//!
//! `GameConfig` carries everything needed to set up one game:
//! - Board shape (`bowls_per_player`) and seeding (`beads_per_bowl`)
//! - One `Strategy` per seat
//! - An optional RNG seed for reproducible play
//!
//! The prompt layer offers a fixed menu of values; `validate` enforces
//! the same ranges so configs built elsewhere cannot drift from it.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::{ConfigError, Seat, SeatMap};
use crate::player::Strategy;

/// Bead counts offered when setting up a game.
pub const BEADS_PER_BOWL_RANGE: RangeInclusive<usize> = 3..=6;

/// Bowls per player on a standard board.
pub const DEFAULT_BOWLS_PER_PLAYER: usize = 6;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Beads placed in every bowl at the start of the game.
    pub beads_per_bowl: usize,

    /// Ordinary bowls per player, excluding the store.
    pub bowls_per_player: usize,

    /// Start-bowl strategy for each seat.
    pub strategies: SeatMap<Strategy>,

    /// Fixed RNG seed. `None` draws a fresh seed per game.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            beads_per_bowl: 4,
            bowls_per_player: DEFAULT_BOWLS_PER_PLAYER,
            strategies: SeatMap::with_value(Strategy::UniformRandom),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of beads per bowl.
    #[must_use]
    pub fn with_beads_per_bowl(mut self, beads: usize) -> Self {
        self.beads_per_bowl = beads;
        self
    }

    /// Set the number of bowls per player.
    #[must_use]
    pub fn with_bowls_per_player(mut self, bowls: usize) -> Self {
        self.bowls_per_player = bowls;
        self
    }

    /// Set the strategy for one seat.
    #[must_use]
    pub fn with_strategy(mut self, seat: Seat, strategy: Strategy) -> Self {
        self.strategies[seat] = strategy;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration against the ranges the game supports.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !BEADS_PER_BOWL_RANGE.contains(&self.beads_per_bowl) {
            return Err(ConfigError::Validation(format!(
                "beads_per_bowl must be in {}..={}, got {}",
                BEADS_PER_BOWL_RANGE.start(),
                BEADS_PER_BOWL_RANGE.end(),
                self.beads_per_bowl
            )));
        }
        if self.bowls_per_player == 0 {
            return Err(ConfigError::Validation(
                "bowls_per_player must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
