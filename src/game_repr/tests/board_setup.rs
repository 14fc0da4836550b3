use super::*;

const INIT_BOARD_STATE: &str = "   - - - B - - B - - -
   - - - - - - - - - -
   - - - - - - - - - -
   B - - - - - - - - B
   - - - - - - - - - -
   - - - - - - - - - -
   W - - - - - - - - W
   - - - - - - - - - -
   - - - - - - - - - -
   - - - W - - W - - -
";

// ==================== INITIAL POSITION ====================

#[test]
fn test_initial_position() {
    let board = Board::new();

    let whites = board.pieces(Color::White);
    let blacks = board.pieces(Color::Black);
    assert_eq!(whites.as_slice(), &[sq("d1"), sq("g1"), sq("a4"), sq("j4")]);
    assert_eq!(blacks.as_slice(), &[sq("a7"), sq("j7"), sq("d10"), sq("g10")]);

    assert_eq!(board.turn(), Color::White);
    assert_eq!(board.num_moves(), 0);
    assert_eq!(board.spear_count(), 0);
    assert!(board.history().is_empty());
    assert_eq!(board.winner(), None);

    let occupied = Square::all().filter(|&s| !board.get(s).is_empty()).count();
    assert_eq!(occupied, 8);
}

#[test]
fn test_basic_put_get() {
    let mut b = Board::new();
    b.put(Piece::Black, Square::sq(3, 5));
    assert_eq!(b.get(Square::sq(3, 5)), Piece::Black);
    b.put(Piece::White, Square::sq(9, 9));
    assert_eq!(b.get(Square::sq(9, 9)), Piece::White);
    b.put(Piece::Empty, Square::sq(3, 5));
    assert_eq!(b.get(Square::sq(3, 5)), Piece::Empty);
}

// ==================== TEXT GRID ====================

#[test]
fn test_display_initial_board() {
    assert_eq!(Board::new().to_string(), INIT_BOARD_STATE);
}

#[test]
fn test_display_after_move() {
    let mut b = Board::new();
    b.make_move("d1-d7(g7)".parse().unwrap());
    let text = b.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[3], "   B - - W - - S - - B");
    assert_eq!(lines[9], "   - - - - - - W - - -");
}

#[test]
fn test_parse_round_trip() {
    let parsed: Board = INIT_BOARD_STATE.parse().unwrap();
    assert_eq!(parsed, Board::new());
}

#[test]
fn test_parse_counts_spears_as_moves() {
    let text = "
        S S - - - - - - - B
        - - - - - - - - - -
        - - - - - - - - - -
        - - - - - - - - - -
        - - - - - - - - - -
        - - - - - - - - - -
        - - - - - - - - - -
        - - - - - - - - - -
        - - - - - - - - - -
        W - - - - - - - - S
    ";
    let b: Board = text.parse().unwrap();
    assert_eq!(b.get(sq("a10")), Piece::Spear);
    assert_eq!(b.get(sq("j10")), Piece::Black);
    assert_eq!(b.get(sq("a1")), Piece::White);
    assert_eq!(b.spear_count(), 3);
    assert_eq!(b.num_moves(), 3);
    assert!(b.history().is_empty());
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        "- - -".parse::<Board>(),
        Err(ParseError::RowCount { expected: 10, got: 1 })
    );

    let short_row = INIT_BOARD_STATE.replacen("   - - - B - - B - - -", "   - - - B - - B - -", 1);
    assert_eq!(
        short_row.parse::<Board>(),
        Err(ParseError::RowLength { row: 10, expected: 10, got: 9 })
    );

    let bad_cell = INIT_BOARD_STATE.replacen('B', "Q", 1);
    assert_eq!(bad_cell.parse::<Board>(), Err(ParseError::InvalidCell('Q')));
}

#[test]
fn test_copy_is_independent() {
    let original = Board::new();
    let mut copy = original.clone();
    copy.make_move("a4-a5(a6)".parse().unwrap());
    assert_eq!(original, Board::new());
    assert_ne!(copy, original);
    assert_eq!(copy.turn(), Color::Black);
}
