//! Game state: the board and the side to move.

use std::fmt;

use crate::chess::board::Board;
use crate::chess::core::{Color, Coordinate, Piece};
use crate::chess::rules::{self, MoveError};

/// A single game between two players. The board can only be changed by
/// [`Game::make_move`] and the turn by [`Game::switch_turn`]; the caller owns
/// the game and decides when the turn passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Creates a game in the standard starting position with White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// Creates a game from an arbitrary piece placement.
    #[must_use]
    pub const fn from_board(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    /// Side that is allowed to move.
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Passes the turn to the other player.
    pub fn switch_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// Checks whether `mover` can move the piece from `from` to `to`.
    ///
    /// The checks run in a fixed order and the first failing one determines
    /// the error:
    ///
    /// 1. Both cells are on the board ([`MoveError::OutOfBounds`]).
    /// 2. There is a piece on `from` ([`MoveError::NoPieceAtSource`]).
    /// 3. That piece belongs to `mover` ([`MoveError::NotYourTurn`]).
    /// 4. `to` is empty or holds an opponent's piece
    ///    ([`MoveError::CannotCaptureOwnPiece`]).
    /// 5. The move follows the rules of the piece ([`MoveError::PathBlocked`]
    ///    or [`MoveError::InvalidMove`]).
    ///
    /// # Errors
    ///
    /// Returns the first violated condition.
    pub fn validate_move(
        &self,
        from: Coordinate,
        to: Coordinate,
        mover: Color,
    ) -> Result<(), MoveError> {
        if !from.in_bounds() || !to.in_bounds() {
            return Err(MoveError::OutOfBounds);
        }
        let piece = self.board.at(from).ok_or(MoveError::NoPieceAtSource)?;
        if piece.color != mover {
            return Err(MoveError::NotYourTurn);
        }
        if self
            .board
            .at(to)
            .is_some_and(|target| target.color == piece.color)
        {
            return Err(MoveError::CannotCaptureOwnPiece);
        }
        rules::check(piece, from, to, &self.board)
    }

    /// Validates the move and, if it is legal, moves the piece. Whatever stood
    /// on `to` is captured and returned. The turn is not switched.
    ///
    /// # Errors
    ///
    /// Same as [`Game::validate_move`]. The board is not modified on error.
    pub fn make_move(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        mover: Color,
    ) -> Result<Option<Piece>, MoveError> {
        if let Err(error) = self.validate_move(from, to, mover) {
            tracing::debug!(%from, %to, %mover, %error, "move rejected");
            return Err(error);
        }
        let captured = self.board.relocate(from, to);
        tracing::trace!(%from, %to, %mover, ?captured, "move made");
        Ok(captured)
    }

    /// The game ends when either king is no longer on the board, i.e. it was
    /// captured. Check and checkmate are not tracked.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !(self.board.has_king(Color::White) && self.board.has_king(Color::Black))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
