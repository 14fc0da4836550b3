//! Player trait and associated types for Amazons game agents.
//!
//! This module provides the core abstraction for entities that can provide moves.
//! Different player types (search AI, random mover) implement the `Player` trait so a
//! driver can pit any two of them against each other.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. Different player
//! implementations require different initialization parameters:
//! - `AiPlayer` needs search configuration and an evaluator
//! - `RandomPlayer` needs a seed
//!
//! Therefore, the trait does not define a constructor method.
//!
//! # Synchronous Design
//!
//! `get_move()` is synchronous: the driver calls it with the current position and
//! waits for an answer. Players never mutate the driver's board; they read it, and the
//! AI searches a private copy.

use crate::game_repr::{Board, Color, Move};

/// Result of a completed game.
///
/// Amazons has no draws: the side left without a legal move loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White won (Black was left without a move)
    WhiteWins,
    /// Black won (White was left without a move)
    BlackWins,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(&self) -> Color {
        match self {
            GameResult::WhiteWins => Color::White,
            GameResult::BlackWins => Color::Black,
        }
    }
}

/// Trait for entities that can provide Amazons moves.
///
/// # Required Methods
///
/// Only `get_move()` must be implemented. All other methods have default implementations
/// that can be overridden as needed.
///
/// ## `get_move()`
/// - **Blocking**: This method may block while the player thinks
/// - **Returns `None`**: If the player has no move to offer (the side to move is stuck)
/// - **Returns `Some(Move)`**: A move for `board.turn()`, legal in `board`
///
/// ## `opponent_moved()` / `game_ended()`
/// - Default: Do nothing
/// - Override: To log moves, keep statistics, etc.
pub trait Player {
    /// Request the next move for the side to move in `board`.
    fn get_move(&mut self, board: &Board) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
