//! Game outcome rules.
//!
//! A game ends as soon as the player to move has no non-empty bowl, or a
//! move leaves the mover without one. Beads still sitting in bowls count
//! toward their owner's total.

pub mod engine;

pub use engine::GameResult;
