use serde::{Deserialize, Serialize};

/// Whether a pit is sown through or collects a player's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitKind {
    /// An ordinary bowl that beads are sown from and through.
    Bowl,
    /// A player's store ("nest"). Never sown from.
    Store,
}

/// A single bead-holding cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pit {
    pub beads: usize,
    pub kind: PitKind,
}

impl Pit {
    #[must_use]
    pub const fn bowl(beads: usize) -> Self {
        Self {
            beads,
            kind: PitKind::Bowl,
        }
    }

    #[must_use]
    pub const fn store() -> Self {
        Self {
            beads: 0,
            kind: PitKind::Store,
        }
    }

    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self.kind, PitKind::Store)
    }
}
