use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// Number of squares on a side of the board.
pub const SIZE: usize = 10;

/// One of the eight queen-move directions.
///
/// The discriminant order (clockwise from north) is the order in which move
/// generation walks directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (column delta, row delta) of a single step
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }
}

/// A square of the 10x10 board. Index layout: `col + 10 * row`, so
/// a1 = 0, j1 = 9, a2 = 10 ... j10 = 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    idx: u8,
}

impl Square {
    /// Square at (`col`, `row`); panics if either is outside 0..10
    pub fn sq(col: usize, row: usize) -> Square {
        assert!(
            col < SIZE && row < SIZE,
            "square ({}, {}) is off the board",
            col,
            row
        );
        Square {
            idx: (col + SIZE * row) as u8,
        }
    }

    pub fn from_index(idx: usize) -> Option<Square> {
        (idx < SIZE * SIZE).then_some(Square { idx: idx as u8 })
    }

    pub fn exists(col: i32, row: i32) -> bool {
        (0..SIZE as i32).contains(&col) && (0..SIZE as i32).contains(&row)
    }

    /// All 100 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..(SIZE * SIZE) as u8).map(|idx| Square { idx })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.idx as usize
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.index() % SIZE
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.index() / SIZE
    }

    /// Direction of a queen move from `self` to `to`, or None when the two
    /// squares are not on a common row, column or diagonal (or are equal).
    pub fn direction(&self, to: Square) -> Option<Direction> {
        let dc = to.col() as i32 - self.col() as i32;
        let dr = to.row() as i32 - self.row() as i32;
        if (dc, dr) == (0, 0) || (dc != 0 && dr != 0 && dc.abs() != dr.abs()) {
            return None;
        }
        let step = (dc.signum(), dr.signum());
        Direction::ALL.into_iter().find(|d| d.delta() == step)
    }

    pub fn is_queen_move(&self, to: Square) -> bool {
        self.direction(to).is_some()
    }

    /// Square `steps` squares away in direction `dir`, if it is on the board
    pub fn queen_move(&self, dir: Direction, steps: usize) -> Option<Square> {
        let (dc, dr) = dir.delta();
        let col = self.col() as i32 + dc * steps as i32;
        let row = self.row() as i32 + dr * steps as i32;
        Self::exists(col, row).then(|| Square::sq(col as usize, row as usize))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col() as u8) as char, self.row() + 1)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidSquare(s.to_string());
        let mut chars = s.chars();
        let col = match chars.next() {
            Some(c @ 'a'..='j') => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let digits = chars.as_str();
        if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: usize = digits.parse().map_err(|_| invalid())?;
        if !(1..=SIZE).contains(&row) {
            return Err(invalid());
        }
        Ok(Square::sq(col, row - 1))
    }
}
