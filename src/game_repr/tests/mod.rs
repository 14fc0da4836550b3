use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Shorthand for a square in algebraic notation
pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Helper function to create an empty board
pub fn empty_board() -> Board {
    Board::empty()
}

/// Helper function to place several pieces at once
pub fn place(board: &mut Board, piece: Piece, squares: &[&str]) {
    for name in squares {
        board.put(piece, sq(name));
    }
}

/// Fill every empty square except `keep` with spears
pub fn fill_spears_except(board: &mut Board, keep: &[&str]) {
    let keep: Vec<Square> = keep.iter().map(|n| sq(n)).collect();
    for s in Square::all() {
        if board.get(s).is_empty() && !keep.contains(&s) {
            board.put(Piece::Spear, s);
        }
    }
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], notation: &str) -> bool {
    let mv: Move = notation.parse().unwrap();
    moves.contains(&mv)
}

// ==================== TEST MODULES ====================

mod board_setup;
mod legal_moves;
