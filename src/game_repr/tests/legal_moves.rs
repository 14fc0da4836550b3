use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::*;

/// Every (from, to, spear) triple that satisfies the legality rules, found
/// by trying all of them
fn brute_force_moves(board: &Board, side: Color) -> HashSet<Move> {
    let mut moves = HashSet::new();
    for from in board.pieces(side) {
        for to in Square::all() {
            if !board.is_unblocked_move(from, to, None) {
                continue;
            }
            for spear in Square::all() {
                if board.is_unblocked_move(to, spear, Some(from)) {
                    moves.insert(Move::new(from, to, spear));
                }
            }
        }
    }
    moves
}

fn assert_matches_brute_force(board: &Board) {
    for side in [Color::White, Color::Black] {
        let generated: Vec<Move> = board.legal_moves_for(side).collect();
        let unique: HashSet<Move> = generated.iter().copied().collect();
        assert_eq!(generated.len(), unique.len(), "generator produced duplicates");
        assert_eq!(unique, brute_force_moves(board, side), "move sets differ for {:?}\n{}", side, board);
        assert!(generated.iter().all(|mv| board.get(mv.from()) == Piece::from(side)));
    }
}

// ==================== COUNTS ====================

#[test]
fn test_opening_move_count() {
    let b = Board::new();
    assert_eq!(b.legal_moves().count(), 2176);
    assert_eq!(b.legal_moves_for(Color::Black).count(), 2176);
}

#[test]
fn test_first_move_in_enumeration_order() {
    let b = Board::new();
    let first = b.legal_moves().next().unwrap();
    assert_eq!(first, "d1-d2(d3)".parse().unwrap());
}

#[test]
fn test_legal_moves_single_amazon() {
    let mut b = empty_board();
    b.put(Piece::White, sq("a1"));
    fill_spears_except(&mut b, &["a1", "a2", "a3"]);

    let moves: Vec<Move> = b.legal_moves().collect();
    assert_eq!(moves.len(), 4);
    assert!(has_move(&moves, "a1-a2(a3)"));
    assert!(has_move(&moves, "a1-a2(a1)"));
    assert!(has_move(&moves, "a1-a3(a2)"));
    assert!(has_move(&moves, "a1-a3(a1)"));
}

#[test]
fn test_no_moves_for_walled_amazon() {
    let mut b = empty_board();
    b.put(Piece::White, sq("a1"));
    place(&mut b, Piece::Spear, &["a2", "b2", "b1"]);
    b.put(Piece::White, sq("j10"));

    assert!(b.legal_moves().all(|mv| mv.from() == sq("j10")));
    assert!(b.legal_moves().count() > 0);
}

#[test]
fn test_iterator_is_single_pass() {
    let mut b = empty_board();
    b.put(Piece::White, sq("a1"));
    fill_spears_except(&mut b, &["a1", "a2"]);

    let mut it = b.legal_moves();
    assert!(it.next().is_some());
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
    assert_eq!(b.legal_moves().count(), 1, "a fresh call starts over");
}

// ==================== CROSS-CHECK ====================

#[test]
fn test_matches_brute_force_on_sparse_board() {
    let text = "
        - - - B - - S - - -
        - S - - - - - - - -
        - - - - - S - - - -
        B - - S - - - - - B
        - - - - - - - - - -
        - - S - - - - S - -
        W - - - - - - - - W
        - - - - S - - - - -
        - - - - - - - - - -
        - - - W - - W - S -
    ";
    let b: Board = text.parse().unwrap();
    assert_matches_brute_force(&b);
}

#[test]
fn test_matches_brute_force_after_random_play() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut b = Board::new();
    for ply in 0..60 {
        if ply % 15 == 0 {
            assert_matches_brute_force(&b);
        }
        let moves: Vec<Move> = b.legal_moves().collect();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        b.make_move(mv);
    }
    assert_matches_brute_force(&b);
}

#[test]
fn test_every_generated_move_is_legal() {
    let b = Board::new();
    assert!(b.legal_moves().all(|mv| b.is_legal_move(&mv)));
}
