// Position evaluation
// Scores are from White's point of view: positive favours White, negative Black

use crate::game_repr::{Board, Color};

/// Score of a decided position (White wins if positive, Black if negative).
/// Larger than any mobility difference can be.
pub const WINNING_VALUE: i32 = i32::MAX - 1;

/// Bound beyond every reachable score; initial alpha/beta window
pub const INFINITY: i32 = i32::MAX;

/// Heuristic score for positions that are not yet decided.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

/// Number of White's legal moves minus number of Black's.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityEvaluator;

impl Evaluator for MobilityEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        mobility(board, Color::White) - mobility(board, Color::Black)
    }
}

/// Count of legal moves available to `side`
pub fn mobility(board: &Board, side: Color) -> i32 {
    board.legal_moves_for(side).count() as i32
}

/// Static score of `board`: the winning sentinel for a decided position,
/// otherwise whatever `evaluator` says.
pub fn static_score<E: Evaluator + ?Sized>(board: &Board, evaluator: &E) -> i32 {
    match board.winner() {
        Some(Color::White) => WINNING_VALUE,
        Some(Color::Black) => -WINNING_VALUE,
        None => evaluator.evaluate(board),
    }
}
