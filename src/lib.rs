//! # kalaha
//!
//! A Kalaha (Mancala) engine: two players, six bowls and a store each,
//! beads sown counter-clockwise with captures and extra turns.
//!
//! ## Design Principles
//!
//! 1. **Exact reproduction**: Board states are deterministic bead-for-bead,
//!    and strategy tie-breaks come from a seedable RNG.
//!
//! 2. **Single owner**: The `Game` owns the board; players borrow it only
//!    while they move.
//!
//! 3. **Illegal moves rejected**: Sowing from a bowl a player does not own,
//!    from a store, or from an empty bowl returns a `MoveError`.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `board`: The circular pit sequence and its rendering
//! - `player`: Strategies and the sowing engine
//! - `rules`: Game results
//! - `game`: The turn loop

pub mod board;
pub mod core;
pub mod game;
pub mod player;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, GameRngState, MoveError, Seat, SeatMap};

pub use crate::board::{Board, Pit, PitKind};

pub use crate::player::{Landing, Player, SowReport, Strategy, TurnReport};

pub use crate::rules::GameResult;

pub use crate::game::{Game, GameStatus};
