//! The interaction surface between the engine and a human player.
//!
//! The game loop talks to a [`Shell`] trait rather than to stdin/stdout
//! directly, so it can be driven by scripted I/O in tests. [`Console`]
//! is the real implementation, generic over its reader and writer the
//! same way an engine protocol wrapper would be.

use std::io::{BufRead, Write};

use awale_core::Player;
use awale_engine::rules::{GameResult, MoveError, MoveOutcome};
use awale_engine::Board;
use thiserror::Error;

use crate::render::board_text;

/// Errors raised by the shell's I/O.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a prompt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the pit at this index.
    Move(usize),
    /// Stop the session.
    Quit,
}

/// Rendering and input capability injected into the game loop.
pub trait Shell {
    /// Shows the welcome banner once per session.
    fn greet(&mut self) -> Result<(), ShellError>;

    /// Renders the current board.
    fn show_board(&mut self, board: &Board) -> Result<(), ShellError>;

    /// Prompts the given player until a move index or a quit arrives.
    fn prompt_action(&mut self, player: Player) -> Result<Action, ShellError>;

    /// Explains why the last chosen pit was rejected.
    fn report_rejection(&mut self, error: &MoveError) -> Result<(), ShellError>;

    /// Announces the captures of an applied move, if any.
    fn report_captures(&mut self, player: Player, outcome: &MoveOutcome) -> Result<(), ShellError>;

    /// Announces the final scores and the winner.
    fn show_result(&mut self, board: &Board, result: GameResult) -> Result<(), ShellError>;
}

/// Console shell over arbitrary buffered I/O.
pub struct Console<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Reads one input line, returning `None` on a closed stream.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Shell for Console<R, W> {
    fn greet(&mut self) -> Result<(), ShellError> {
        writeln!(self.writer, "Welcome to Awale!")?;
        writeln!(
            self.writer,
            "Capture more seeds than your opponent to win.\n"
        )?;
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> Result<(), ShellError> {
        writeln!(self.writer, "{}", board_text(board))?;
        Ok(())
    }

    fn prompt_action(&mut self, player: Player) -> Result<Action, ShellError> {
        loop {
            write!(self.writer, "{}, choose a pit (or 'q' to quit): ", player)?;
            self.writer.flush()?;

            // A closed input stream ends the session cleanly.
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(Action::Quit),
            };
            let trimmed = line.trim();

            if trimmed.eq_ignore_ascii_case("q") {
                return Ok(Action::Quit);
            }
            match trimmed.parse::<usize>() {
                Ok(index) => return Ok(Action::Move(index)),
                Err(_) => writeln!(self.writer, "Please enter a pit number!")?,
            }
        }
    }

    fn report_rejection(&mut self, error: &MoveError) -> Result<(), ShellError> {
        writeln!(self.writer, "{}", error)?;
        Ok(())
    }

    fn report_captures(&mut self, player: Player, outcome: &MoveOutcome) -> Result<(), ShellError> {
        for capture in &outcome.captures {
            writeln!(
                self.writer,
                "{} captures {} seeds from pit {}!",
                player, capture.seeds, capture.pit
            )?;
        }
        Ok(())
    }

    fn show_result(&mut self, board: &Board, result: GameResult) -> Result<(), ShellError> {
        writeln!(self.writer, "GAME OVER!")?;
        writeln!(self.writer, "South score: {}", board.score(Player::South))?;
        writeln!(self.writer, "North score: {}", board.score(Player::North))?;
        match result {
            GameResult::SouthWins => writeln!(self.writer, "South wins!")?,
            GameResult::NorthWins => writeln!(self.writer, "North wins!")?,
            GameResult::Draw => writeln!(self.writer, "It's a draw!")?,
        }
        Ok(())
    }
}

/// Creates a console shell using stdin/stdout.
pub fn stdio_console() -> Console<std::io::BufReader<std::io::Stdin>, std::io::Stdout> {
    Console::new(
        std::io::BufReader::new(std::io::stdin()),
        std::io::stdout(),
    )
}
