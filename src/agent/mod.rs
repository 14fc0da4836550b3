pub mod player;
pub use player::*;

pub mod random_player;
pub use random_player::*;

pub mod two_player;
pub use two_player::*;

pub mod ai;
pub use ai::{AiPlayer, SearchConfig, SearchResult};
