//! Player representation.

use crate::Pit;

/// Represents the two players in awale.
///
/// South owns pits 0-5 and moves first; North owns pits 6-11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    South = 0,
    North = 1,
}

impl Player {
    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::South => Player::North,
            Player::North => Player::South,
        }
    }

    /// Returns the index (0 for South, 1 for North).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the first pit of this player's row (0 for South, 6 for North).
    #[inline]
    pub const fn first_house(self) -> Pit {
        match self {
            Player::South => Pit::SOUTH_FIRST,
            Player::North => Pit::NORTH_FIRST,
        }
    }

    /// Returns true if the given pit lies in this player's row.
    #[inline]
    pub const fn owns(self, pit: Pit) -> bool {
        pit.owner() as u8 == self as u8
    }

    /// Returns this player's six pits in ascending index order.
    pub fn houses(self) -> impl DoubleEndedIterator<Item = Pit> {
        let first = self.first_house().index();
        (first..first + Pit::PER_PLAYER).map(|i| match Pit::from_index(i) {
            Some(p) => p,
            None => unreachable!(),
        })
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::South => write!(f, "South"),
            Player::North => write!(f, "North"),
        }
    }
}
