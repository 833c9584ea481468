//! Awale rules engine.
//!
//! This crate provides:
//! - [`Board`] - Full game state: pit contents, captured scores, side to move
//! - [`Game`] - Complete game management with move history
//! - Move validation, sowing, capture resolution, and terminal detection
//!
//! # Rules
//!
//! Each player owns six pits; every pit starts with four seeds. A move
//! empties one of the mover's pits and sows its seeds counter-clockwise,
//! one per pit. If the last seed lands in an opponent pit holding two or
//! three seeds afterwards, that pit is captured, chaining backward through
//! contiguous opponent pits holding two or three - unless the capture
//! would strip the opponent of every seed, in which case nothing is
//! captured. A player whose opponent has no seeds must play a move that
//! feeds them. The game ends at 25 captured seeds or when no legal move
//! remains.
//!
//! # Example
//!
//! ```
//! use awale_engine::{rules, Board, Game};
//!
//! // Using Board directly (stateless)
//! let mut board = Board::new();
//! let pit = rules::validate_move(&board, 2).unwrap();
//! let outcome = rules::apply_move(&mut board, pit).unwrap();
//! assert_eq!(outcome.captured_total(), 0);
//!
//! // Using Game for full game management
//! let mut game = Game::new();
//! game.play(2).unwrap();
//! assert_eq!(game.ply_count(), 1);
//! ```

mod board;
mod game;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameError, PlayedMove};
pub use rules::{
    apply_move, feeds_opponent, game_result, is_terminal, legal_moves, validate_move,
    CaptureEvent, GameResult, MoveError, MoveList, MoveOutcome, WINNING_SCORE,
};
