//! Player that picks uniformly among the legal moves.
//!
//! Useful as a sparring partner for the search AI and for generating varied
//! positions in tests and self-play.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use super::player::Player;
use crate::game_repr::{Board, Move};

pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    /// Create a random player with a fixed seed (reproducible games)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: "Random".to_string(),
        }
    }

    /// Create a random player seeded from the OS
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &Board) -> Option<Move> {
        // reservoir sampling keeps move generation lazy
        board.legal_moves().choose(&mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
