use std::iter::FusedIterator;

use crate::game_repr::{Board, Direction, Square};

/// Position in a walk over the squares reachable from `from`.
///
/// Directions are visited in `Direction::ALL` order, each walked outward one
/// square at a time until it is blocked or leaves the board.
#[derive(Debug, Clone)]
pub struct ReachCursor {
    from: Square,
    as_empty: Option<Square>,
    dir: usize,
    steps: usize,
}

impl ReachCursor {
    pub fn new(from: Square, as_empty: Option<Square>) -> Self {
        Self {
            from,
            as_empty,
            dir: 0,
            steps: 0,
        }
    }

    /// A cursor that yields nothing
    pub fn exhausted() -> Self {
        Self {
            from: Square::sq(0, 0),
            as_empty: None,
            dir: Direction::ALL.len(),
            steps: 0,
        }
    }

    /// Next reachable square, or None once every direction is blocked.
    ///
    /// The squares before the current one in this direction were already
    /// found unblocked, so only the new square has to be vacant.
    pub fn next(&mut self, board: &Board) -> Option<Square> {
        while let Some(&dir) = Direction::ALL.get(self.dir) {
            match self.from.queen_move(dir, self.steps + 1) {
                Some(sq) if board.is_vacant(sq, self.as_empty) => {
                    self.steps += 1;
                    debug_assert!(board.is_unblocked_move(self.from, sq, self.as_empty));
                    return Some(sq);
                }
                _ => {
                    self.dir += 1;
                    self.steps = 0;
                }
            }
        }
        None
    }
}

/// Iterator over the squares reachable by an unblocked queen move.
pub struct ReachableFrom<'a> {
    board: &'a Board,
    cursor: ReachCursor,
}

impl<'a> ReachableFrom<'a> {
    pub fn new(board: &'a Board, from: Square, as_empty: Option<Square>) -> Self {
        Self {
            board,
            cursor: ReachCursor::new(from, as_empty),
        }
    }
}

impl Iterator for ReachableFrom<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        self.cursor.next(self.board)
    }
}

impl FusedIterator for ReachableFrom<'_> {}
