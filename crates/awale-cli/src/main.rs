//! Interactive awale session for two players at one console.

mod render;
mod shell;

use awale_engine::rules::GameResult;
use awale_engine::{Game, GameError};

use crate::shell::{stdio_console, Action, Shell, ShellError};

/// Runs one game session against the given shell.
///
/// Returns the final result, or `None` if a player quit mid-game.
fn run<S: Shell>(shell: &mut S) -> Result<Option<GameResult>, ShellError> {
    let mut game = Game::new();
    shell.greet()?;

    while !game.is_over() {
        shell.show_board(game.board())?;

        let index = match shell.prompt_action(game.board().to_move)? {
            Action::Move(index) => index,
            Action::Quit => return Ok(None),
        };

        let mover = game.board().to_move;
        match game.play(index) {
            Ok(outcome) => shell.report_captures(mover, &outcome)?,
            Err(GameError::Illegal(e)) => shell.report_rejection(&e)?,
            // The loop condition rules this out.
            Err(GameError::GameAlreadyOver) => break,
        }
    }

    shell.show_board(game.board())?;
    match game.result() {
        Some(result) => {
            shell.show_result(game.board(), result)?;
            Ok(Some(result))
        }
        None => Ok(None),
    }
}

fn main() {
    let mut console = stdio_console();
    if let Err(e) = run(&mut console) {
        eprintln!("session error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Console;
    use std::io::Cursor;

    fn run_script(input: &str) -> (Option<GameResult>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run(&mut console).unwrap();
        let output = String::from_utf8(console.into_writer()).unwrap();
        (result, output)
    }

    #[test]
    fn quit_immediately() {
        let (result, output) = run_script("q\n");
        assert_eq!(result, None);
        assert!(output.contains("Welcome to Awale!"));
        assert!(output.contains("Current turn: South"));
        assert!(!output.contains("GAME OVER"));
    }

    #[test]
    fn illegal_then_legal_then_quit() {
        // Pit 9 belongs to North, pit 2 is fine, then North quits.
        let (result, output) = run_script("9\n2\nq\n");
        assert_eq!(result, None);
        assert!(output.contains("choose a pit on your own side"));
        assert!(output.contains("Current turn: North"));
    }

    #[test]
    fn eof_ends_session() {
        let (result, _) = run_script("");
        assert_eq!(result, None);
    }
}
