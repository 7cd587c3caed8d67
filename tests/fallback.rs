use pawnrace::{first_legal_move, is_valid_move, Board, Move};
use pretty_assertions::assert_eq;

#[test]
fn skips_immobile_pawns_and_plays_straight() {
    // (0,0) is walled in by its own row; (1,0) is the first pawn that can move.
    assert_eq!(first_legal_move(&Board::initial()), Some(Move::from_indices((1, 0), (2, 0))));
}

#[test]
fn prefers_right_diagonal_over_left() {
    let b: Board = "______/______/__B___/__W___/______/______".parse().unwrap();
    assert_eq!(first_legal_move(&b), Some(Move::from_indices((2, 2), (3, 3))));
}

#[test]
fn falls_back_to_left_diagonal() {
    let b: Board = "______/______/__B___/__WB__/___B__/______".parse().unwrap();
    // (2,2): straight is White, right (3,3) is Black; only the left slide remains.
    assert_eq!(first_legal_move(&b), Some(Move::from_indices((2, 2), (3, 1))));
}

#[test]
fn none_without_black_pawns() {
    let b: Board = "______/______/______/______/WWWWWW/______".parse().unwrap();
    assert_eq!(first_legal_move(&b), None);
}

#[test]
fn fallback_moves_are_always_valid() {
    for text in [
        "BBBBBB/_BBBBB/______/_B____/_WWWWW/WWWWWW",
        "_BBBBB/_BBBBB/______/_B____/WWWWWW/__WWWW",
        "__BBBB/_BBBBB/______/_BW___/_WWWWW/___WWW",
    ] {
        let b: Board = text.parse().unwrap();
        let m = first_legal_move(&b).expect("position has moves");
        assert!(is_valid_move(&b, m));
    }
}
