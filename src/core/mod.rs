//! Core engine types: seats, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, players and game.

pub mod config;
pub mod error;
pub mod rng;
pub mod seat;

pub use config::{GameConfig, BEADS_PER_BOWL_RANGE, DEFAULT_BOWLS_PER_PLAYER};
pub use error::{ConfigError, MoveError};
pub use rng::{GameRng, GameRngState};
pub use seat::{Seat, SeatMap};
