//! Whole-game playouts checking the board invariants after every move.

use awale_core::Player;
use awale_engine::{rules, Board, Game, GameError};
use proptest::prelude::*;

/// Asserts everything that must hold for a board reached by legal play.
fn check_invariants(board: &Board) {
    let total = board.seeds_in_play() + board.scores[0] + board.scores[1];
    assert_eq!(total, Board::TOTAL_SEEDS, "seed conservation violated");
}

/// Plays one legal move chosen by `pick`, or returns false at a terminal
/// board. Capture bounds and the no-starve rule are checked on the way.
fn step(game: &mut Game, pick: usize) -> bool {
    let moves = game.legal_moves();
    if game.is_over() {
        assert!(
            moves.is_empty() || game.result().is_some(),
            "game over must come with a result"
        );
        return false;
    }
    assert!(!moves.is_empty(), "live game must offer a legal move");

    let mover = game.board().to_move;
    let pit = moves.as_slice()[pick % moves.len()];
    let outcome = match game.play(pit.index() as usize) {
        Ok(o) => o,
        Err(e) => panic!("legal move rejected: {}", e),
    };

    check_invariants(game.board());

    // Capture bounds: each event empties one opponent pit of 2 or 3 seeds,
    // and the events walk backward contiguously from the landing pit.
    let opponent = mover.opponent();
    let mut expected = outcome.landing.index();
    for event in &outcome.captures {
        assert!(event.seeds == 2 || event.seeds == 3);
        assert!(opponent.owns(event.pit));
        assert_eq!(event.pit.index(), expected);
        assert_eq!(game.board().seeds(event.pit), 0);
        expected = expected.wrapping_sub(1);
    }

    // A capture never strips the opponent of every seed.
    if !outcome.captures.is_empty() {
        assert!(game.board().side_total(opponent) > 0);
    }

    true
}

#[test]
fn first_legal_move_playout() {
    let mut game = Game::new();
    for _ in 0..500 {
        if !step(&mut game, 0) {
            break;
        }
    }
    // Whether or not the playout terminated, every visited board held the
    // invariants; if it did terminate the result must match the scores.
    if let Some(result) = game.result() {
        let south = game.board().score(Player::South);
        let north = game.board().score(Player::North);
        match result {
            rules::GameResult::SouthWins => assert!(south > north),
            rules::GameResult::NorthWins => assert!(north > south),
            rules::GameResult::Draw => assert_eq!(south, north),
        }
    }
}

#[test]
fn finished_game_refuses_further_play() {
    let board = Board::from_parts([0; 12], [26, 22], Player::North);
    let mut game = Game::from_board(board);
    assert!(game.is_over());
    assert_eq!(game.play(6), Err(GameError::GameAlreadyOver));
}

proptest! {
    #[test]
    fn random_playouts_hold_invariants(picks in proptest::collection::vec(0usize..6, 1..200)) {
        let mut game = Game::new();
        for pick in picks {
            if !step(&mut game, pick) {
                break;
            }
        }
    }

    #[test]
    fn validation_rejects_without_mutation(index in 0usize..16, picks in proptest::collection::vec(0usize..6, 0..30)) {
        // Drive the game into an arbitrary reachable position first.
        let mut game = Game::new();
        for pick in picks {
            if !step(&mut game, pick) {
                break;
            }
        }

        let before = game.board().clone();
        let _ = rules::validate_move(game.board(), index);
        prop_assert_eq!(game.board(), &before);
    }
}
