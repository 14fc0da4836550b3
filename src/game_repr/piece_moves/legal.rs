use std::iter::FusedIterator;

use super::ReachCursor;
use crate::game_repr::{Board, Color, Move, Piece, Square};

/// Position in the enumeration of every legal move for one side.
///
/// Three nested walks: origins in square-index order, destinations reachable
/// from the origin, then spear targets reachable from the destination with
/// the origin treated as vacated. Only the current triple is ever held.
#[derive(Debug, Clone)]
pub struct MoveCursor {
    side: Piece,
    next_index: usize,
    from: Option<Square>,
    destinations: ReachCursor,
    to: Option<Square>,
    spears: ReachCursor,
}

impl MoveCursor {
    pub fn new(side: Color) -> Self {
        Self {
            side: Piece::from(side),
            next_index: 0,
            from: None,
            destinations: ReachCursor::exhausted(),
            to: None,
            spears: ReachCursor::exhausted(),
        }
    }

    /// Next legal move, or None once all have been produced.
    ///
    /// `board` must be in the same position on every call.
    pub fn next(&mut self, board: &Board) -> Option<Move> {
        loop {
            if let (Some(from), Some(to)) = (self.from, self.to) {
                if let Some(spear) = self.spears.next(board) {
                    return Some(Move::new(from, to, spear));
                }
            }

            if let Some(from) = self.from {
                if let Some(to) = self.destinations.next(board) {
                    self.to = Some(to);
                    self.spears = ReachCursor::new(to, Some(from));
                    continue;
                }
            }

            self.to = None;
            self.from = self.next_origin(board);
            match self.from {
                Some(from) => self.destinations = ReachCursor::new(from, None),
                None => return None,
            }
        }
    }

    fn next_origin(&mut self, board: &Board) -> Option<Square> {
        while let Some(sq) = Square::from_index(self.next_index) {
            self.next_index += 1;
            if board.get(sq) == self.side {
                return Some(sq);
            }
        }
        None
    }
}

/// Iterator over the legal moves of one side.
///
/// Single pass: call `Board::legal_moves` again to start over.
pub struct LegalMoves<'a> {
    board: &'a Board,
    cursor: MoveCursor,
}

impl<'a> LegalMoves<'a> {
    pub fn new(board: &'a Board, side: Color) -> Self {
        Self {
            board,
            cursor: MoveCursor::new(side),
        }
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.cursor.next(self.board)
    }
}

impl FusedIterator for LegalMoves<'_> {}
