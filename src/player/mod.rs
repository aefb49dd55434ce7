//! Players: ownership of one half of the board, a strategy, and the
//! sowing engine that mutates the board on their behalf.
//!
//! A `Player` never holds the board itself. The `Game` owns the single
//! `Board` and lends it to whichever player is moving, so only one player
//! can mutate it at a time.

mod sow;
mod strategy;

pub use sow::{Landing, SowReport, TurnReport};
pub use strategy::Strategy;

use std::ops::Range;

use crate::board::Board;
use crate::core::{GameRng, Seat};

/// One side of the board plus the strategy used to play it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    owned: Range<usize>,
    strategy: Strategy,
}

impl Player {
    /// Create the player for `seat` on `board`.
    #[must_use]
    pub fn new(seat: Seat, board: &Board, strategy: Strategy) -> Self {
        Self {
            seat,
            owned: board.owned_range(seat),
            strategy,
        }
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Owned pit indices, half-open; the last index is the store.
    #[must_use]
    pub fn owned_range(&self) -> Range<usize> {
        self.owned.clone()
    }

    #[must_use]
    pub fn store_index(&self) -> usize {
        self.owned.end - 1
    }

    #[must_use]
    pub fn owns(&self, index: usize) -> bool {
        self.owned.contains(&index)
    }

    #[must_use]
    pub fn beads_in_store(&self, board: &Board) -> usize {
        board.beads(self.store_index())
    }

    #[must_use]
    pub fn beads_in_bowls(&self, board: &Board) -> usize {
        (self.owned.start..self.store_index())
            .map(|i| board.beads(i))
            .sum()
    }

    #[must_use]
    pub fn total_beads(&self, board: &Board) -> usize {
        self.beads_in_store(board) + self.beads_in_bowls(board)
    }

    /// Whether any owned bowl still holds beads.
    #[must_use]
    pub fn has_legal_move(&self, board: &Board) -> bool {
        self.beads_in_bowls(board) > 0
    }

    /// Pick a start bowl with this player's strategy.
    pub fn select_start(&self, board: &Board, rng: &mut GameRng) -> Option<usize> {
        self.strategy.select(board, self.owned_range(), rng)
    }

    /// One-line summary for display alongside the board.
    #[must_use]
    pub fn describe(&self, board: &Board) -> String {
        format!(
            "{}: store {}, bowls {}, strategy {}",
            self.seat,
            self.beads_in_store(board),
            self.beads_in_bowls(board),
            self.strategy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_player() {
        let board = Board::new(3, 6);
        let player = Player::new(Seat::First, &board, Strategy::UniformRandom);

        assert_eq!(player.strategy(), Strategy::UniformRandom);
        assert_eq!(player.owned_range(), 0..7);
        assert_eq!(player.beads_in_store(&board), 0);
        assert_eq!(player.beads_in_bowls(&board), 18);
        assert_eq!(player.total_beads(&board), 18);
        assert!(player.has_legal_move(&board));
    }

    #[test]
    fn test_second_seat() {
        let board = Board::from_counts(&[1, 1, 1, 2, 0, 4, 0, 6]);
        let player = Player::new(Seat::Second, &board, Strategy::GreedyMax);

        assert_eq!(player.owned_range(), 4..8);
        assert_eq!(player.store_index(), 7);
        assert!(player.owns(7));
        assert!(!player.owns(3));
        assert_eq!(player.beads_in_store(&board), 6);
        assert_eq!(player.beads_in_bowls(&board), 4);
        assert_eq!(player.total_beads(&board), 10);
    }

    #[test]
    fn test_no_legal_move() {
        let board = Board::from_counts(&[0, 0, 0, 12, 1, 1, 1, 0]);
        let player = Player::new(Seat::First, &board, Strategy::GreedyMax);
        let mut rng = GameRng::new(0);

        assert!(!player.has_legal_move(&board));
        assert_eq!(player.select_start(&board, &mut rng), None);
    }

    #[test]
    fn test_describe() {
        let board = Board::new(3, 3);
        let player = Player::new(Seat::Second, &board, Strategy::GreedyMax);
        assert_eq!(
            player.describe(&board),
            "player2: store 0, bowls 9, strategy greedy-max"
        );
    }
}
