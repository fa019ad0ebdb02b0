//! Movement rules of individual pieces.
//!
//! Each rule is a pure function over the source and destination cells and the
//! current occupancy. Rules only judge the geometry of the move: they assume
//! both cells are on the board and that the destination does not hold a piece
//! of the moving side, which [`crate::chess::game::Game::validate_move`]
//! checks before dispatching to them.

use crate::chess::board::Board;
use crate::chess::core::{Color, Coordinate, Piece, PieceKind};

/// Reasons for rejecting a move. Each one is recoverable: the board is left
/// untouched and the player can try another move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Source or destination is not on the board.
    #[error("out of bounds")]
    OutOfBounds,
    /// Source cell is empty.
    #[error("no piece at source")]
    NoPieceAtSource,
    /// Piece on the source cell belongs to the opponent.
    #[error("not your turn")]
    NotYourTurn,
    /// Destination holds a piece of the moving side.
    #[error("cannot capture own piece")]
    CannotCaptureOwnPiece,
    /// A sliding piece would have to jump over another piece.
    #[error("path blocked")]
    PathBlocked,
    /// The piece can not move in this shape.
    #[error("invalid {0} move")]
    InvalidMove(PieceKind),
}

/// Dispatches to the rule of the moving piece.
pub(crate) fn check(
    piece: Piece,
    from: Coordinate,
    to: Coordinate,
    board: &Board,
) -> Result<(), MoveError> {
    match piece.kind {
        PieceKind::Pawn => pawn(piece.color, from, to, board),
        PieceKind::Rook => rook(from, to, board),
        PieceKind::Knight => knight(from, to),
        PieceKind::Bishop => bishop(from, to, board),
        PieceKind::Queen => queen(from, to, board),
        PieceKind::King => king(from, to),
    }
}

/// Pawns push one cell forward onto an empty cell or capture one cell
/// diagonally forward. There are no double pushes, en passant or promotions.
pub(crate) fn pawn(
    color: Color,
    from: Coordinate,
    to: Coordinate,
    board: &Board,
) -> Result<(), MoveError> {
    let delta = to - from;
    if delta.row != color.pawn_direction() {
        return Err(MoveError::InvalidMove(PieceKind::Pawn));
    }
    let occupied = board.at(to).is_some();
    match (delta.col.abs(), occupied) {
        (0, false) | (1, true) => Ok(()),
        _ => Err(MoveError::InvalidMove(PieceKind::Pawn)),
    }
}

/// Rooks slide along a row or a column.
pub(crate) fn rook(from: Coordinate, to: Coordinate, board: &Board) -> Result<(), MoveError> {
    if !is_straight(to - from) {
        return Err(MoveError::InvalidMove(PieceKind::Rook));
    }
    path_clear(from, to, board)
}

/// Knights jump in an "L" shape; pieces in between don't matter.
pub(crate) fn knight(from: Coordinate, to: Coordinate) -> Result<(), MoveError> {
    let delta = to - from;
    match (delta.row.abs(), delta.col.abs()) {
        (1, 2) | (2, 1) => Ok(()),
        _ => Err(MoveError::InvalidMove(PieceKind::Knight)),
    }
}

/// Bishops slide along diagonals.
pub(crate) fn bishop(from: Coordinate, to: Coordinate, board: &Board) -> Result<(), MoveError> {
    if !is_diagonal(to - from) {
        return Err(MoveError::InvalidMove(PieceKind::Bishop));
    }
    path_clear(from, to, board)
}

/// Queens move either like a rook or like a bishop.
pub(crate) fn queen(from: Coordinate, to: Coordinate, board: &Board) -> Result<(), MoveError> {
    let delta = to - from;
    if !is_diagonal(delta) && !is_straight(delta) {
        return Err(MoveError::InvalidMove(PieceKind::Queen));
    }
    path_clear(from, to, board)
}

/// Kings step to any adjacent cell. Castling is not supported.
pub(crate) fn king(from: Coordinate, to: Coordinate) -> Result<(), MoveError> {
    let delta = to - from;
    if delta.row.abs() <= 1 && delta.col.abs() <= 1 {
        Ok(())
    } else {
        Err(MoveError::InvalidMove(PieceKind::King))
    }
}

/// Checks that no piece stands strictly between `from` and `to`. The
/// endpoints themselves are not inspected.
///
/// `from` and `to` have to be on the same row, column or diagonal.
pub(crate) fn path_clear(from: Coordinate, to: Coordinate, board: &Board) -> Result<(), MoveError> {
    let delta = to - from;
    debug_assert!(is_straight(delta) || is_diagonal(delta));
    let step = delta.signum();
    let distance = delta.row.abs().max(delta.col.abs());
    if (1..distance).any(|i| board.at(from + step * i).is_some()) {
        return Err(MoveError::PathBlocked);
    }
    Ok(())
}

/// Exactly one of the components is non-zero.
const fn is_straight(delta: Coordinate) -> bool {
    (delta.row == 0) != (delta.col == 0)
}

const fn is_diagonal(delta: Coordinate) -> bool {
    delta.row != 0 && delta.row.abs() == delta.col.abs()
}
