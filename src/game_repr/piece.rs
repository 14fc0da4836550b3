use super::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Contents of a single board cell.
///
/// Spears never move; during play only `undo` takes one off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    White,
    Black,
    Spear,
}

impl From<Color> for Piece {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Piece::White,
            Color::Black => Piece::Black,
        }
    }
}

impl Piece {
    pub fn is_empty(&self) -> bool {
        *self == Piece::Empty
    }

    /// True for the two playable sides
    pub fn is_amazon(&self) -> bool {
        matches!(self, Piece::White | Piece::Black)
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Piece::White => Some(Color::White),
            Piece::Black => Some(Color::Black),
            _ => None,
        }
    }

    /// Opponent of a playable side. Empty squares and spears have none.
    pub fn opponent(&self) -> Option<Piece> {
        self.color().map(|c| Piece::from(c.opposite()))
    }

    pub fn to_char(&self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::Spear => 'S',
        }
    }

    pub fn from_char(c: char) -> Result<Self, ParseError> {
        match c {
            '-' => Ok(Piece::Empty),
            'W' => Ok(Piece::White),
            'B' => Ok(Piece::Black),
            'S' => Ok(Piece::Spear),
            _ => Err(ParseError::InvalidCell(c)),
        }
    }
}
