//! Board pit representation.
//!
//! The 12 pits form a ring: sowing proceeds counter-clockwise, so the
//! successor of pit 11 is pit 0. Pits 0-5 belong to South, 6-11 to North.

use std::fmt;

use crate::Player;

/// A pit on the awale board, indexed 0-11.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pit(u8);

impl Pit {
    /// Total number of pits on the board.
    pub const COUNT: u8 = 12;

    /// Number of pits in each player's row.
    pub const PER_PLAYER: u8 = 6;

    /// First pit of South's row.
    pub const SOUTH_FIRST: Pit = Pit(0);

    /// First pit of North's row.
    pub const NORTH_FIRST: Pit = Pit(6);

    /// All pits in index order.
    pub const ALL: [Pit; 12] = [
        Pit(0),
        Pit(1),
        Pit(2),
        Pit(3),
        Pit(4),
        Pit(5),
        Pit(6),
        Pit(7),
        Pit(8),
        Pit(9),
        Pit(10),
        Pit(11),
    ];

    /// Creates a pit from index (0-11).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < Self::COUNT {
            Some(Pit(index))
        } else {
            None
        }
    }

    /// Returns the index (0-11).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the next pit in sowing order, wrapping 11 back to 0.
    #[inline]
    pub const fn next(self) -> Pit {
        Pit((self.0 + 1) % Self::COUNT)
    }

    /// Returns the player whose row contains this pit.
    #[inline]
    pub const fn owner(self) -> Player {
        if self.0 < Self::PER_PLAYER {
            Player::South
        } else {
            Player::North
        }
    }
}

impl fmt::Debug for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pit({})", self.0)
    }
}

impl fmt::Display for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
