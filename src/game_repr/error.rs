/// Errors produced when reading squares, moves or board grids from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid square: '{0}'")]
    InvalidSquare(String),

    #[error("invalid move notation: '{0}'")]
    InvalidMove(String),

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("expected {expected} cells in row {row}, got {got}")]
    RowLength { row: usize, expected: usize, got: usize },

    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },
}
