mod board;
mod error;
mod moves;
mod piece;
mod square;
pub mod piece_moves;

#[cfg(test)]
mod tests;

pub use board::*;
pub use error::*;
pub use moves::*;
pub use piece::*;
pub use square::*;
pub use piece_moves::*;
