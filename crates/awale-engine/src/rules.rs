//! Move legality, sowing, capture resolution, and terminal detection.
//!
//! All decision functions here are read-only: [`validate_move`],
//! [`feeds_opponent`], [`is_terminal`], and [`game_result`] never touch
//! the board. Only [`apply_move`] mutates, and only after the move has
//! passed validation.

use awale_core::{Pit, Player};
use thiserror::Error;

use crate::Board;

/// Captured seeds required to win outright.
pub const WINNING_SCORE: u8 = 25;

/// Reasons a chosen pit is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("pit index {0} is out of range (expected 0-11)")]
    OutOfRange(usize),

    #[error("pit {pit} belongs to {owner}; choose a pit on your own side")]
    WrongOwner { pit: Pit, owner: Player },

    #[error("pit {0} is empty")]
    EmptyPit(Pit),

    #[error("your opponent has no seeds; pit {0} would not feed them")]
    MustFeedOpponent(Pit),
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// South holds the higher score.
    SouthWins,
    /// North holds the higher score.
    NorthWins,
    /// Scores are equal.
    Draw,
}

/// One pit emptied during capture resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureEvent {
    /// The captured pit.
    pub pit: Pit,
    /// Seeds it held (always 2 or 3).
    pub seeds: u8,
}

/// What a single applied move did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The pit that received the final sown seed.
    pub landing: Pit,
    /// Captured pits in resolution order (landing pit first, walking
    /// backward). Empty when nothing was captured.
    pub captures: Vec<CaptureEvent>,
}

impl MoveOutcome {
    /// Total seeds captured by this move.
    pub fn captured_total(&self) -> u8 {
        self.captures.iter().map(|c| c.seeds).sum()
    }
}

/// A list of legal pits with a fixed maximum capacity.
///
/// A player owns six pits, so at most six moves are ever legal; a
/// fixed-size array avoids heap allocation during legality scans.
#[derive(Clone)]
pub struct MoveList {
    pits: [Pit; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of legal moves in any position.
    pub const MAX_MOVES: usize = Pit::PER_PLAYER as usize;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            pits: [Pit::SOUTH_FIRST; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a pit to the list.
    #[inline]
    pub fn push(&mut self, pit: Pit) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.pits[self.len] = pit;
        self.len += 1;
    }

    /// Returns the number of legal moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no move is legal.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the legal pits.
    #[inline]
    pub fn as_slice(&self) -> &[Pit] {
        &self.pits[..self.len]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Pit;
    type IntoIter = std::slice::Iter<'a, Pit>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Returns true if sowing from `pit` would drop at least one seed into
/// the opponent's row.
///
/// Pure simulation; the board is not touched. Used by the
/// starvation-avoidance rule and by terminal detection.
pub fn feeds_opponent(board: &Board, pit: Pit) -> bool {
    let opponent = board.to_move.opponent();
    let seeds = board.seeds(pit);

    let mut current = pit;
    for _ in 0..seeds {
        current = current.next();
        if opponent.owns(current) {
            return true;
        }
    }
    false
}

/// Checks whether the pit at `index` is a legal move for the side to move.
///
/// The rules are applied in order: the index must name a pit, the pit
/// must belong to the mover and hold seeds, and when the opponent's row
/// is empty the move must feed them. Returns the validated [`Pit`] so
/// callers can hand it straight to [`apply_move`].
pub fn validate_move(board: &Board, index: usize) -> Result<Pit, MoveError> {
    let pit = u8::try_from(index)
        .ok()
        .and_then(Pit::from_index)
        .ok_or(MoveError::OutOfRange(index))?;

    let mover = board.to_move;
    if !mover.owns(pit) {
        return Err(MoveError::WrongOwner {
            pit,
            owner: pit.owner(),
        });
    }

    if board.seeds(pit) == 0 {
        return Err(MoveError::EmptyPit(pit));
    }

    if board.side_is_empty(mover.opponent()) && !feeds_opponent(board, pit) {
        return Err(MoveError::MustFeedOpponent(pit));
    }

    Ok(pit)
}

/// Returns all legal pits for the side to move, in ascending order.
pub fn legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    for pit in board.to_move.houses() {
        if validate_move(board, pit.index() as usize).is_ok() {
            moves.push(pit);
        }
    }
    moves
}

/// Applies a move: empties the pit, sows its seeds counter-clockwise,
/// resolves captures, and passes the turn to the opponent.
///
/// The move is re-validated first and an illegal move returns `Err`
/// without mutating the board, so callers that already ran
/// [`validate_move`] pay only a cheap redundant check.
pub fn apply_move(board: &mut Board, pit: Pit) -> Result<MoveOutcome, MoveError> {
    validate_move(board, pit.index() as usize)?;

    let mover = board.to_move;
    let seeds = board.seeds(pit);
    board.pits[pit.index() as usize] = 0;

    // Sow counter-clockwise. With 12 or more seeds the walk wraps all the
    // way around and the origin pit receives seeds again.
    let mut current = pit;
    for _ in 0..seeds {
        current = current.next();
        board.pits[current.index() as usize] += 1;
    }

    let captures = resolve_captures(board, mover, current);
    for capture in &captures {
        board.scores[mover.index()] += capture.seeds;
        board.pits[capture.pit.index() as usize] = 0;
    }

    board.to_move = mover.opponent();

    Ok(MoveOutcome {
        landing: current,
        captures,
    })
}

/// Determines which pits the landing seed captures, without mutating.
///
/// Starting at the landing pit and walking backward through the
/// opponent's row, every contiguous pit holding exactly 2 or 3 seeds
/// joins the chain. If emptying the whole chain would leave the opponent
/// with zero seeds the capture is cancelled and the chain is empty.
fn resolve_captures(board: &Board, mover: Player, landing: Pit) -> Vec<CaptureEvent> {
    let opponent = mover.opponent();
    if !opponent.owns(landing) {
        return Vec::new();
    }

    let mut captures = Vec::new();
    let row_start = opponent.first_house().index();
    let mut index = landing.index();
    loop {
        let count = board.pits[index as usize];
        if count != 2 && count != 3 {
            break;
        }
        // Walking backward stays inside the row, so the index is valid.
        let pit = match Pit::from_index(index) {
            Some(p) => p,
            None => unreachable!(),
        };
        captures.push(CaptureEvent { pit, seeds: count });
        if index == row_start {
            break;
        }
        index -= 1;
    }

    let total: u8 = captures.iter().map(|c| c.seeds).sum();
    if board.side_total(opponent) == total {
        // Taking everything would starve the opponent; the capture is
        // forfeited entirely.
        return Vec::new();
    }
    captures
}

/// Returns true if play must stop on this board.
///
/// The game ends when either score reaches [`WINNING_SCORE`], when the
/// side to move has no seeds left, or when the opponent has no seeds and
/// none of the mover's pits can feed them.
pub fn is_terminal(board: &Board) -> bool {
    if board.score(Player::South) >= WINNING_SCORE || board.score(Player::North) >= WINNING_SCORE {
        return true;
    }

    let mover = board.to_move;
    if board.side_is_empty(mover) {
        return true;
    }

    if board.side_is_empty(mover.opponent()) {
        let can_feed = mover
            .houses()
            .any(|p| board.seeds(p) > 0 && feeds_opponent(board, p));
        if !can_feed {
            return true;
        }
    }

    false
}

/// Returns the game result once the board is terminal, `None` otherwise.
///
/// The result is a plain score comparison: seeds still sitting on the
/// board when play stops are counted for nobody.
pub fn game_result(board: &Board) -> Option<GameResult> {
    if !is_terminal(board) {
        return None;
    }

    let south = board.score(Player::South);
    let north = board.score(Player::North);
    Some(match south.cmp(&north) {
        std::cmp::Ordering::Greater => GameResult::SouthWins,
        std::cmp::Ordering::Less => GameResult::NorthWins,
        std::cmp::Ordering::Equal => GameResult::Draw,
    })
}
