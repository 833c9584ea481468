//! Board state representation.

use awale_core::{Pit, Player};

/// Complete awale board state.
///
/// `Board` is plain data: the rules live in the [`rules`](crate::rules)
/// module, and [`Game`](crate::Game) wraps a board with history tracking.
/// Every board reachable from [`Board::new`] by legal moves satisfies the
/// conservation law: the pits and both scores always sum to
/// [`TOTAL_SEEDS`](Board::TOTAL_SEEDS).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Seeds in each pit, indexed by `Pit::index()`.
    pub pits: [u8; Pit::COUNT as usize],

    /// Seeds captured by each player, indexed by `Player::index()`.
    pub scores: [u8; 2],

    /// The player whose turn it is.
    pub to_move: Player,
}

impl Board {
    /// Seeds in every pit at the start of a game.
    pub const INITIAL_SEEDS: u8 = 4;

    /// Total seeds on the board (12 pits of 4).
    pub const TOTAL_SEEDS: u8 = Pit::COUNT * Self::INITIAL_SEEDS;

    /// Creates the starting position: four seeds everywhere, South to move.
    pub const fn new() -> Self {
        Board {
            pits: [Self::INITIAL_SEEDS; Pit::COUNT as usize],
            scores: [0; 2],
            to_move: Player::South,
        }
    }

    /// Creates a board from explicit parts.
    ///
    /// Intended for tests and custom starting positions; performs no
    /// validation, so the conservation law is only guaranteed for boards
    /// whose parts already satisfy it.
    pub const fn from_parts(pits: [u8; 12], scores: [u8; 2], to_move: Player) -> Self {
        Board {
            pits,
            scores,
            to_move,
        }
    }

    /// Returns the number of seeds in a pit.
    #[inline]
    pub const fn seeds(&self, pit: Pit) -> u8 {
        self.pits[pit.index() as usize]
    }

    /// Returns a player's captured-seed score.
    #[inline]
    pub const fn score(&self, player: Player) -> u8 {
        self.scores[player.index()]
    }

    /// Returns the total seeds currently in a player's row.
    pub fn side_total(&self, player: Player) -> u8 {
        player.houses().map(|p| self.seeds(p)).sum()
    }

    /// Returns true if every pit in a player's row is empty.
    pub fn side_is_empty(&self, player: Player) -> bool {
        self.side_total(player) == 0
    }

    /// Returns the seeds still on the board (not yet captured).
    pub fn seeds_in_play(&self) -> u8 {
        self.pits.iter().sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
