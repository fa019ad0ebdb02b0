//! The console puts all pieces together: it reads moves typed by the two
//! players, applies them to the [`Game`] and reports the outcome.
//!
//! [`Console::run`] is the "main loop" of the program. It is generic over the
//! input and output streams so that it can be driven by tests as well as by
//! stdin/stdout.

use std::io::{BufRead, Write};

use crate::chess::core::Color;
use crate::chess::game::Game;

mod command;

pub use command::{Command, ParseError};

/// How the session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A king was captured by the `winner`.
    KingCaptured {
        #[allow(missing_docs)]
        winner: Color,
    },
    /// A player typed "quit" or "exit".
    Quit,
    /// Input stream was closed.
    EndOfInput,
}

/// Owns the game for the duration of the session.
#[derive(Debug, Default)]
pub struct Console {
    game: Game,
}

impl Console {
    /// Creates a console with a new game in the starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::with_game(Game::new())
    }

    /// Creates a console that continues an existing game.
    #[must_use]
    pub const fn with_game(game: Game) -> Self {
        Self { game }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Continuously reads the input stream and plays the moves until the game
    /// is over, a player quits or the input ends.
    ///
    /// Malformed input and illegal moves are reported to the output and the
    /// same player is asked again; the turn only passes after a legal move.
    ///
    /// # Errors
    ///
    /// Only I/O errors on the streams are propagated.
    pub fn run(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> anyhow::Result<Outcome> {
        writeln!(output, "Chess Console Started!")?;
        loop {
            self.prompt(output)?;

            let mut line = String::new();
            // EOF reached.
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(Outcome::EndOfInput);
            }

            let (from, to) = match Command::parse(&line) {
                Ok(Command::Move { from, to }) => (from, to),
                Ok(Command::Help) => {
                    writeln!(output, "{}", command::USAGE)?;
                    continue;
                },
                Ok(Command::Quit) => return Ok(Outcome::Quit),
                Ok(Command::Empty) => continue,
                Err(e) => {
                    tracing::error!(input = line.trim(), error = %e, "invalid input");
                    writeln!(output, "Invalid input: {e}")?;
                    continue;
                },
            };

            let mover = self.game.turn();
            match self.game.make_move(from, to, mover) {
                Ok(captured) => {
                    tracing::info!(%mover, %from, %to, "move");
                    if let Some(piece) = captured {
                        tracing::info!(%mover, captured = %piece.kind, at = %to, "capture");
                    }
                },
                Err(e) => {
                    tracing::error!(%mover, %from, %to, error = %e, "invalid move");
                    writeln!(output, "Invalid move: {e}")?;
                    continue;
                },
            }

            if self.game.is_game_over() {
                writeln!(output, "{}", self.game)?;
                writeln!(output, "Game Over! King captured. {mover} wins.")?;
                tracing::info!(winner = %mover, "game over");
                return Ok(Outcome::KingCaptured { winner: mover });
            }
            self.game.switch_turn();
        }
    }

    fn prompt(&self, output: &mut impl Write) -> anyhow::Result<()> {
        writeln!(output, "{}", self.game)?;
        writeln!(output, "Turn: {}", self.game.turn())?;
        write!(output, "Enter move (e.g., a2 a3): ")?;
        output.flush()?;
        Ok(())
    }
}
