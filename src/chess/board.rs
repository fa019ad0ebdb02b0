//! Mailbox board representation: an 8x8 grid of optional pieces.

use std::fmt;

use itertools::Itertools;

use crate::chess::core::{Color, Coordinate, Piece, PieceKind, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;

const BACK_RANK: [PieceKind; WIDTH] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement. Row 0 is rank 8 (Black's back rank), row 7 is rank 1
/// (White's back rank), column 0 is file 'a'.
///
/// Each cell holds at most one piece. Accessors take [`Coordinate`]s and treat
/// off-board cells as empty, so no query can index past the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; WIDTH]; WIDTH],
}

impl Board {
    /// Board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; WIDTH]; WIDTH],
        }
    }

    /// Standard starting arrangement.
    ///
    /// ```
    /// use chess_console::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "  a b c d e f g h
    /// 8 r n b q k b n r
    /// 7 p p p p p p p p
    /// 6 . . . . . . . .
    /// 5 . . . . . . . .
    /// 4 . . . . . . . .
    /// 3 . . . . . . . .
    /// 2 P P P P P P P P
    /// 1 R N B Q K B N R"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[WIDTH - 2][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[WIDTH - 1][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Piece standing on the cell, if any. Off-board cells are always empty.
    #[must_use]
    pub fn at(&self, square: Coordinate) -> Option<Piece> {
        let (row, col) = square.index()?;
        self.cells[row][col]
    }

    /// Places the piece on the cell, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// The cell has to be on the board.
    pub fn put(&mut self, square: Coordinate, piece: Piece) {
        *self.cell_mut(square) = Some(piece);
    }

    /// Removes the piece from the cell (no-op if it was already empty).
    ///
    /// # Panics
    ///
    /// The cell has to be on the board.
    pub fn clear(&mut self, square: Coordinate) {
        *self.cell_mut(square) = None;
    }

    /// Moves the contents of `from` to `to` and returns the piece that was
    /// standing on `to` before.
    ///
    /// Both cells must be on the board; callers validate the move first.
    pub(crate) fn relocate(&mut self, from: Coordinate, to: Coordinate) -> Option<Piece> {
        let piece = self.cell_mut(from).take();
        std::mem::replace(self.cell_mut(to), piece)
    }

    /// Iterates over all occupied cells from rank 8 to rank 1, file 'a' to 'h'.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        (0..BOARD_WIDTH)
            .cartesian_product(0..BOARD_WIDTH)
            .map(|(row, col)| Coordinate::new(row, col))
            .filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    /// Whether the board still holds a king of the given color.
    #[must_use]
    pub fn has_king(&self, color: Color) -> bool {
        self.pieces()
            .any(|(_, piece)| piece == Piece::new(PieceKind::King, color))
    }

    fn cell_mut(&mut self, square: Coordinate) -> &mut Option<Piece> {
        let Some((row, col)) = square.index() else {
            panic!("{square} is not on the board");
        };
        &mut self.cells[row][col]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    /// Dumps the board in a simple format: rank labels on the left, '.' for
    /// empty square and FEN algebraic symbol for a piece.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}", ('a'..='h').join(SQUARE_SEPARATOR))?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{LINE_SEPARATOR}{} ", WIDTH - row)?;
            let line = cells
                .iter()
                .map(|cell| {
                    cell.map_or_else(|| EMPTY_SQUARE.to_string(), |piece| piece.to_string())
                })
                .join(SQUARE_SEPARATOR);
            f.write_str(&line)?;
        }
        Ok(())
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
const EMPTY_SQUARE: char = '.';

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starting_arrangement() {
        let board = Board::starting();
        assert_eq!(board.pieces().count(), 32);
        for color in [Color::White, Color::Black] {
            assert_eq!(
                board
                    .pieces()
                    .filter(|(_, piece)| piece.color == color)
                    .count(),
                16
            );
            assert_eq!(
                board
                    .pieces()
                    .filter(|(_, piece)| *piece == Piece::new(PieceKind::Pawn, color))
                    .count(),
                8
            );
        }
        assert_eq!(
            board.at(Coordinate::new(7, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.at(Coordinate::new(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.at(Coordinate::new(4, 4)), None);
    }

    #[test]
    fn off_board_cells_are_empty() {
        let board = Board::starting();
        assert_eq!(board.at(Coordinate::new(-1, 0)), None);
        assert_eq!(board.at(Coordinate::new(0, 8)), None);
        assert_eq!(board.at(Coordinate::new(i32::MAX, i32::MIN)), None);
    }

    #[test]
    fn put_and_clear() {
        let mut board = Board::empty();
        let square = Coordinate::new(3, 3);
        board.put(square, Piece::new(PieceKind::Rook, Color::Black));
        assert_eq!(
            board.at(square),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        board.put(square, Piece::new(PieceKind::Bishop, Color::White));
        assert_eq!(
            board.at(square),
            Some(Piece::new(PieceKind::Bishop, Color::White))
        );
        board.clear(square);
        assert_eq!(board.at(square), None);
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    #[should_panic(expected = "(8, 0) is not on the board")]
    fn put_off_board() {
        Board::empty().put(
            Coordinate::new(8, 0),
            Piece::new(PieceKind::Pawn, Color::White),
        );
    }

    #[test]
    fn relocate_captures() {
        let mut board = Board::starting();
        let captured = board.relocate(Coordinate::new(7, 0), Coordinate::new(0, 0));
        assert_eq!(captured, Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(board.at(Coordinate::new(7, 0)), None);
        assert_eq!(
            board.at(Coordinate::new(0, 0)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(board.pieces().count(), 31);
    }

    #[test]
    fn kings() {
        let mut board = Board::starting();
        assert!(board.has_king(Color::White));
        assert!(board.has_king(Color::Black));
        board.clear(Coordinate::new(0, 4));
        assert!(!board.has_king(Color::Black));
        assert!(board.has_king(Color::White));
    }

    #[test]
    fn render_empty() {
        assert_eq!(
            Board::empty().to_string(),
            "  a b c d e f g h\n\
             8 . . . . . . . .\n\
             7 . . . . . . . .\n\
             6 . . . . . . . .\n\
             5 . . . . . . . .\n\
             4 . . . . . . . .\n\
             3 . . . . . . . .\n\
             2 . . . . . . . .\n\
             1 . . . . . . . ."
        );
    }
}
