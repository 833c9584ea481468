//! Full game management with history tracking.
//!
//! The [`Game`] struct wraps a [`Board`] with everything a session needs:
//! move validation on entry, outcome recording, and terminal detection
//! after every applied move.

use std::fmt;

use awale_core::Pit;

use crate::rules::{self, GameResult, MoveError, MoveList, MoveOutcome};
use crate::Board;

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    /// The pit that was emptied.
    pub pit: Pit,
    /// What the move did: landing pit and captures.
    pub outcome: MoveOutcome,
}

/// Error type for game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The move is not legal on the current board.
    Illegal(MoveError),
    /// The game has already ended.
    GameAlreadyOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Illegal(e) => write!(f, "illegal move: {}", e),
            GameError::GameAlreadyOver => write!(f, "game has already ended"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Illegal(e)
    }
}

/// A complete awale game with history tracking.
///
/// Unlike [`Board`], which is a bare state value, `Game` refuses moves
/// once the game is over and keeps the move record needed to replay the
/// session for display.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current board.
    board: Board,
    /// Starting board.
    start: Board,
    /// Move history with outcomes.
    moves: Vec<PlayedMove>,
    /// Game result if the game has ended.
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a game from a custom starting board.
    pub fn from_board(board: Board) -> Self {
        let result = rules::game_result(&board);
        Game {
            board: board.clone(),
            start: board,
            moves: Vec::new(),
            result,
        }
    }

    /// Returns a reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the starting board.
    pub fn start_board(&self) -> &Board {
        &self.start
    }

    /// Returns all legal moves on the current board.
    pub fn legal_moves(&self) -> MoveList {
        rules::legal_moves(&self.board)
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// Returns the number of moves played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Plays the pit at `index` for the side to move.
    ///
    /// Validates, applies, records the move, and re-evaluates whether the
    /// game has ended. A rejected move leaves the board untouched.
    pub fn play(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        let pit = rules::validate_move(&self.board, index)?;
        let outcome = rules::apply_move(&mut self.board, pit)?;
        self.moves.push(PlayedMove {
            pit,
            outcome: outcome.clone(),
        });
        self.result = rules::game_result(&self.board);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awale_core::Player;

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.ply_count(), 0);
        assert!(!game.is_over());
        assert_eq!(game.legal_moves().len(), 6);
    }

    #[test]
    fn play_records_history() {
        let mut game = Game::new();
        game.play(2).unwrap();
        game.play(8).unwrap();

        assert_eq!(game.ply_count(), 2);
        let history = game.move_history();
        assert_eq!(history[0].pit.index(), 2);
        assert_eq!(history[1].pit.index(), 8);
        assert_eq!(game.start_board(), &Board::new());
    }

    #[test]
    fn illegal_move_rejected_without_mutation() {
        let mut game = Game::new();
        let before = game.board().clone();
        let err = game.play(9).unwrap_err();
        assert!(matches!(err, GameError::Illegal(MoveError::WrongOwner { .. })));
        assert_eq!(game.board(), &before);
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn turn_alternates() {
        let mut game = Game::new();
        assert_eq!(game.board().to_move, Player::South);
        game.play(0).unwrap();
        assert_eq!(game.board().to_move, Player::North);
        game.play(6).unwrap();
        assert_eq!(game.board().to_move, Player::South);
    }

    #[test]
    fn terminal_board_ends_game_immediately() {
        let board = Board::from_parts([0; 12], [25, 23], Player::South);
        let game = Game::from_board(board);
        assert!(game.is_over());
        assert_eq!(game.result(), Some(GameResult::SouthWins));
    }

    #[test]
    fn cannot_play_after_game_over() {
        let board = Board::from_parts([0; 12], [25, 23], Player::South);
        let mut game = Game::from_board(board);
        let err = game.play(0).unwrap_err();
        assert_eq!(err, GameError::GameAlreadyOver);
    }

    #[test]
    fn game_ends_when_score_threshold_reached() {
        // One capture away from the threshold: landing on pit 6 takes 2
        // seeds and lifts South to 25.
        let board = Board::from_parts(
            [0, 0, 0, 0, 0, 1, 1, 4, 4, 4, 4, 4],
            [23, 3],
            Player::South,
        );
        let mut game = Game::from_board(board);
        assert!(!game.is_over());

        let outcome = game.play(5).unwrap();
        assert_eq!(outcome.captured_total(), 2);
        assert_eq!(game.board().score(Player::South), 25);
        assert!(game.is_over());
        assert_eq!(game.result(), Some(GameResult::SouthWins));
    }

    #[test]
    fn conservation_across_play() {
        let mut game = Game::new();
        for index in [0, 6, 1, 7, 2, 8, 5, 11] {
            if game.is_over() {
                break;
            }
            if game.play(index).is_err() {
                continue;
            }
            let board = game.board();
            let total = board.seeds_in_play() + board.scores[0] + board.scores[1];
            assert_eq!(total, Board::TOTAL_SEEDS);
        }
    }
}
