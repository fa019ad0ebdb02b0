//! Parsing of the lines typed by the players.

use itertools::Itertools;

use crate::chess::core::{Coordinate, CoordinateError};

/// Commands understood by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move a piece, e.g. "e2 e3".
    Move {
        #[allow(missing_docs)]
        from: Coordinate,
        #[allow(missing_docs)]
        to: Coordinate,
    },
    /// Print usage.
    Help,
    /// Leave the game ("quit" or "exit").
    Quit,
    /// Blank line.
    Empty,
}

/// Input that could not be turned into a [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[allow(missing_docs)]
    #[error("input must be two coordinates (e.g., a2 b3)")]
    WrongTokenCount,
    #[allow(missing_docs)]
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

impl Command {
    /// Parses a single line of input. Case and surrounding whitespace are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Anything other than a keyword must be exactly two valid coordinates.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.to_lowercase();
        let tokens = line.split_whitespace().collect_vec();
        match tokens.as_slice() {
            [] => Ok(Self::Empty),
            ["quit" | "exit"] => Ok(Self::Quit),
            ["help"] => Ok(Self::Help),
            [from, to] => Ok(Self::Move {
                from: Coordinate::try_from(*from)?,
                to: Coordinate::try_from(*to)?,
            }),
            _ => Err(ParseError::WrongTokenCount),
        }
    }
}

pub(super) const USAGE: &str = "Enter a move as two coordinates: the square of the piece and \
                                the square it goes to, e.g. \"e2 e3\".\nType \"quit\" or \
                                \"exit\" to leave the game.";
