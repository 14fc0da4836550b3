use std::fmt;
use std::str::FromStr;

use super::{ParseError, Square};

/// A complete Amazons move: an amazon travels `from` -> `to`, then throws
/// a spear from `to` onto `spear`.
///
/// Written as `d1-d7(g7)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    spear: Square,
}

impl Move {
    pub fn new(from: Square, to: Square, spear: Square) -> Move {
        Self { from, to, spear }
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    pub fn spear(&self) -> Square {
        self.spear
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.spear)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Accepts `d1-d7(g7)` as well as the whitespace form `d1 d7 g7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidMove(s.to_string());
        let parts: Vec<&str> = s
            .split(|c: char| c == '-' || c == '(' || c == ')' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [from, to, spear] => Ok(Move::new(
                from.parse().map_err(|_| invalid())?,
                to.parse().map_err(|_| invalid())?,
                spear.parse().map_err(|_| invalid())?,
            )),
            _ => Err(invalid()),
        }
    }
}
