//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Kalaha is strictly a two-player game, so a player is identified by the
//! side of the board they sit on.
//!
//! ## SeatMap
//!
//! Fixed two-entry storage indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Which side of the board a player owns.
///
/// `First` owns the low half of the pit sequence and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Both seats in turn order.
    ///
    /// ```
    /// use kalaha::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all().collect();
    /// assert_eq!(seats, vec![Seat::First, Seat::Second]);
    /// ```
    pub fn all() -> impl Iterator<Item = Seat> {
        [Seat::First, Seat::Second].into_iter()
    }

    /// Display title, matching the historical "player1"/"player2" naming.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Seat::First => "player1",
            Seat::Second => "player2",
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use kalaha::core::{Seat, SeatMap};
///
/// let mut score: SeatMap<u32> = SeatMap::new(|_| 0);
/// score[Seat::Second] += 3;
/// assert_eq!(score[Seat::First], 0);
/// assert_eq!(score[Seat::Second], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::First), factory(Seat::Second)],
        }
    }

    /// Create a SeatMap from explicit first/second values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::all().zip(self.data.iter())
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        &mut self.data[seat.index()]
    }
}
