//! Drives a game between two players until one side runs out of moves.

use super::player::{GameResult, Player};
use crate::game_repr::{Board, Color, Move};

pub struct TwoPlayerGame {
    board: Board,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    result: Option<GameResult>,
}

impl TwoPlayerGame {
    /// New game from the standard starting position
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self::from_position(Board::new(), white, black)
    }

    pub fn from_position(board: Board, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            board,
            white,
            black,
            result: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Ask the side to move for a move and play it.
    ///
    /// Returns the move played, or None once the game is over. A player
    /// that offers no move or an illegal one forfeits.
    pub fn step(&mut self) -> Option<Move> {
        if self.result.is_some() {
            return None;
        }
        if let Some(winner) = self.board.winner() {
            self.finish(GameResult::from_winner(winner));
            return None;
        }

        let side = self.board.turn();
        let (mover, other) = match side {
            Color::White => (&mut self.white, &mut self.black),
            Color::Black => (&mut self.black, &mut self.white),
        };

        match mover.get_move(&self.board) {
            Some(mv) if self.board.is_legal_move(&mv) => {
                log::debug!("{} ({:?}) plays {}", mover.name(), side, mv);
                self.board.make_move(mv);
                other.opponent_moved(mv);
                Some(mv)
            }
            offered => {
                log::warn!(
                    "{} ({:?}) forfeits with {:?} in\n{}",
                    mover.name(),
                    side,
                    offered.map(|m| m.to_string()),
                    self.board
                );
                self.finish(GameResult::from_winner(side.opposite()));
                None
            }
        }
    }

    /// Play until the game is decided
    pub fn play_to_end(&mut self) -> GameResult {
        loop {
            if let Some(result) = self.result {
                return result;
            }
            self.step();
        }
    }

    fn finish(&mut self, result: GameResult) {
        log::info!(
            "game over after {} moves: {:?}",
            self.board.num_moves(),
            result
        );
        self.white.game_ended(result);
        self.black.game_ended(result);
        self.result = Some(result);
    }
}
