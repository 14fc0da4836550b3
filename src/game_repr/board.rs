use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME STATE, LEGALITY AND MAKE/UNDO
 */

/// Cached answer to "who has won?" for the side to move.
///
/// Every mutation resets it to `Stale`; `winner()` fills it on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WinnerCache {
    Stale,
    Known(Option<Color>),
}

/// The state of an Amazons game on a 10x10 board.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Piece; SIZE * SIZE],
    turn: Color,
    /// Applied moves, oldest first. `undo` pops from here.
    history: Vec<Move>,
    num_moves: usize,
    winner: Cell<WinnerCache>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.turn == other.turn
            && self.num_moves == other.num_moves
            && self.history == other.history
    }
}

impl Eq for Board {}

impl Board {
    /// Board in the standard starting position, White to move.
    pub fn new() -> Board {
        let mut board = Self::empty();
        for (col, row) in [(0, 3), (3, 0), (6, 0), (9, 3)] {
            board.put(Piece::White, Square::sq(col, row));
        }
        for (col, row) in [(0, 6), (3, 9), (6, 9), (9, 6)] {
            board.put(Piece::Black, Square::sq(col, row));
        }
        board
    }

    /// Board with no pieces at all, White to move
    pub fn empty() -> Board {
        Self {
            cells: [Piece::Empty; SIZE * SIZE],
            turn: Color::White,
            history: Vec::new(),
            num_moves: 0,
            winner: Cell::new(WinnerCache::Stale),
        }
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    pub fn put(&mut self, piece: Piece, sq: Square) {
        self.cells[sq.index()] = piece;
        self.invalidate_winner();
    }

    /// Side to move
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
        self.invalidate_winner();
    }

    /// Number of moves made that have not been undone (plus any spears the
    /// position started with, for boards read from text).
    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Squares occupied by `color`, in index order
    pub fn pieces(&self, color: Color) -> SmallVec<[Square; 4]> {
        let piece = Piece::from(color);
        Square::all().filter(|&sq| self.get(sq) == piece).collect()
    }

    pub fn spear_count(&self) -> usize {
        self.cells.iter().filter(|&&p| p == Piece::Spear).count()
    }

    /// True if `sq` is empty, or is `as_empty`.
    #[inline]
    pub(crate) fn is_vacant(&self, sq: Square, as_empty: Option<Square>) -> bool {
        self.get(sq).is_empty() || Some(sq) == as_empty
    }

    /// True iff `from`-`to` is a queen move and every square along it after
    /// `from`, including `to`, is empty or is `as_empty`.
    pub fn is_unblocked_move(&self, from: Square, to: Square, as_empty: Option<Square>) -> bool {
        let Some(dir) = from.direction(to) else {
            return false;
        };
        let mut steps = 1;
        while let Some(sq) = from.queen_move(dir, steps) {
            if !self.is_vacant(sq, as_empty) {
                return false;
            }
            if sq == to {
                return true;
            }
            steps += 1;
        }
        false
    }

    /// True iff `from` holds an amazon of either color.
    pub fn is_legal_origin(&self, from: Square) -> bool {
        self.get(from).is_amazon()
    }

    /// True iff `from`-`to` is a legal first half of a move, ignoring the spear.
    pub fn is_legal_step(&self, from: Square, to: Square) -> bool {
        self.is_legal_origin(from) && self.is_unblocked_move(from, to, None)
    }

    /// True iff `from`-`to`(`spear`) is legal. The origin counts as empty
    /// for the spear throw since the amazon has left it.
    pub fn is_legal(&self, from: Square, to: Square, spear: Square) -> bool {
        self.is_legal_step(from, to) && self.is_unblocked_move(to, spear, Some(from))
    }

    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.is_legal(mv.from(), mv.to(), mv.spear())
    }

    /// Apply `mv` for the amazon standing on its origin and pass the turn.
    ///
    /// # Panics
    ///
    /// If `mv` is not legal in this position. Callers should only play
    /// moves drawn from `legal_moves()` or checked with `is_legal_move`.
    pub fn make_move(&mut self, mv: Move) {
        assert!(self.is_legal_move(&mv), "illegal move {}", mv);

        let amazon = self.get(mv.from());
        self.cells[mv.to().index()] = amazon;
        self.cells[mv.from().index()] = Piece::Empty;
        self.cells[mv.spear().index()] = Piece::Spear;

        self.num_moves += 1;
        self.history.push(mv);
        self.turn = self.turn.opposite();
        self.invalidate_winner();
    }

    /// Take back the last move. Does nothing when there is no move to undo.
    pub fn undo(&mut self) {
        let Some(mv) = self.history.pop() else {
            return;
        };

        // spear first: it may have been thrown back onto the origin
        self.cells[mv.spear().index()] = Piece::Empty;
        self.cells[mv.from().index()] = self.cells[mv.to().index()];
        self.cells[mv.to().index()] = Piece::Empty;

        self.num_moves -= 1;
        self.turn = self.turn.opposite();
        self.invalidate_winner();
    }

    /// The winner of the current position, or None while the side to move
    /// still has a legal move. A side with no moves loses; there are no draws.
    pub fn winner(&self) -> Option<Color> {
        if let WinnerCache::Known(winner) = self.winner.get() {
            return winner;
        }
        let winner = if self.has_legal_move(self.turn) {
            None
        } else {
            Some(self.turn.opposite())
        };
        self.winner.set(WinnerCache::Known(winner));
        winner
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn has_legal_move(&self, side: Color) -> bool {
        self.legal_moves_for(side).next().is_some()
    }

    /// Legal moves for the side to move, generated lazily
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        self.legal_moves_for(self.turn)
    }

    /// Legal moves for `side`, regardless of whose turn it is
    pub fn legal_moves_for(&self, side: Color) -> LegalMoves<'_> {
        LegalMoves::new(self, side)
    }

    /// Squares reachable by an unblocked queen move from `from`, treating
    /// `as_empty` as empty. The contents of `from` are not looked at.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableFrom<'_> {
        ReachableFrom::new(self, from, as_empty)
    }

    fn invalidate_winner(&self) {
        self.winner.set(WinnerCache::Stale);
    }
}

impl fmt::Display for Board {
    /// One line per row from row 10 down to row 1, each cell as ` -`, ` W`,
    /// ` B` or ` S` after a two-space indent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            write!(f, "  ")?;
            for col in 0..SIZE {
                write!(f, " {}", self.get(Square::sq(col, row)).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Reads the grid written by `Display`; whitespace between cells is
    /// ignored and blank lines are skipped. The result has White to move,
    /// an empty history, and counts every spear as a move already made.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        if rows.len() != SIZE {
            return Err(ParseError::RowCount {
                expected: SIZE,
                got: rows.len(),
            });
        }

        let mut board = Board::empty();
        for (i, line) in rows.iter().enumerate() {
            let row = SIZE - 1 - i;
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != SIZE {
                return Err(ParseError::RowLength {
                    row: row + 1,
                    expected: SIZE,
                    got: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                board.cells[Square::sq(col, row).index()] = Piece::from_char(c)?;
            }
        }
        board.num_moves = board.spear_count();
        Ok(board)
    }
}
