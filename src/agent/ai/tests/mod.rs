use crate::game_repr::{Board, Color, Move};

use super::*;

// ==================== HELPER POSITIONS ====================

/// White a1 and Black d3 sharing a 4x3 pocket in the corner
pub const POCKET: &str = "
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    - - - B S S S S S S
    - - - - S S S S S S
    W - - - S S S S S S
";

/// Two separate pockets; the top right one is contested
pub const TWO_POCKETS: &str = "
    S S S S S S S - - B
    S S S S S S S W - -
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    - - S S S S S S S S
    - - S S S S S S S S
    W - S S S S S S S S
";

/// White to move can wall Black in by throwing onto j2
pub const WALL_IN: &str = "
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    S S S S S S S S S S
    W - - - - - - - - -
    S S S S S S S S S -
    S S S S S S S S S B
";

pub fn board_with_turn(text: &str, turn: Color) -> Board {
    let mut board: Board = text.parse().unwrap();
    board.set_turn(turn);
    board
}

pub fn mv(notation: &str) -> Move {
    notation.parse().unwrap()
}

/// Plain minimax without pruning; returns (score, nodes visited)
pub fn minimax(board: &mut Board, depth: u8) -> (i32, u64) {
    if depth == 0 || board.winner().is_some() {
        return (static_score(board, &MobilityEvaluator), 0);
    }
    let maximizing = board.turn() == Color::White;
    let moves: Vec<Move> = board.legal_moves().collect();
    let mut best = if maximizing { -INFINITY } else { INFINITY };
    let mut nodes = 0;
    for m in moves {
        board.make_move(m);
        let (score, below) = minimax(board, depth - 1);
        board.undo();
        nodes += below + 1;
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    (best, nodes)
}
