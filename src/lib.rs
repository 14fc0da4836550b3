//! Amazons game engine.
//!
//! - [`game_repr`]: board state, queen-move geometry, legality, make/undo and
//!   lazy move generation.
//! - [`agent`]: players, including the alpha-beta search AI.
//!
//! ```no_run
//! use amazons_engine::agent::{AiPlayer, Player};
//! use amazons_engine::game_repr::Board;
//!
//! let mut board = Board::new();
//! let mut ai = AiPlayer::new();
//! if let Some(mv) = ai.get_move(&board) {
//!     board.make_move(mv);
//! }
//! assert_eq!(board.num_moves(), 1);
//! ```

pub mod agent;
pub mod game_repr;
