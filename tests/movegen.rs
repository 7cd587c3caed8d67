use std::collections::HashSet;

use pawnrace::movegen::{is_valid_raw, winner};
use pawnrace::{generate_moves, is_game_over, is_valid_move, legal_moves, Board, Move, Side};
use pretty_assertions::assert_eq;

fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
    Move::from_indices(from, to)
}

#[test]
fn generator_matches_hand_enumeration() {
    // (1,0) sits on the left edge, (2,5) is blocked straight by its own pawn.
    let b: Board = "______/B__B__/_____B/___W_B/______/______".parse().unwrap();
    let got: HashSet<Move> = generate_moves(&b).into_iter().collect();
    let want: HashSet<Move> = [
        mv((1, 0), (2, 0)),
        mv((1, 0), (2, 1)),
        mv((1, 3), (2, 3)),
        mv((1, 3), (2, 2)),
        mv((1, 3), (2, 4)),
        mv((2, 5), (3, 4)),
        mv((3, 5), (4, 5)),
        mv((3, 5), (4, 4)),
    ]
    .into_iter()
    .collect();
    assert_eq!(got, want);
}

#[test]
fn straight_move_blocked_by_enemy_diagonals_capture() {
    let b: Board = "______/______/__B___/_WWW__/______/______".parse().unwrap();
    let got = generate_moves(&b);
    assert_eq!(got, vec![mv((2, 2), (3, 1)), mv((2, 2), (3, 3))]);
}

#[test]
fn capture_scenario_is_generated() {
    let b: Board = "______/______/______/___B__/__W___/______".parse().unwrap();
    let moves = generate_moves(&b);
    assert!(moves.contains(&mv((3, 3), (4, 2))), "capture missing from {moves:?}");
    assert!(is_valid_move(&b, mv((3, 3), (4, 2))));
}

#[test]
fn generation_order_is_row_major_then_straight_left_right() {
    let moves = generate_moves(&Board::initial());
    assert_eq!(moves.len(), 16);
    assert_eq!(&moves[..4], &[mv((1, 0), (2, 0)), mv((1, 0), (2, 1)), mv((1, 1), (2, 1)), mv((1, 1), (2, 0))]);
    assert_eq!(moves[4], mv((1, 1), (2, 2)));
    assert!(moves.iter().all(|m| m.from.row == 1 && m.to.row == 2));
}

#[test]
fn every_generated_move_passes_the_oracle() {
    for text in [
        "BBBBBB/BBBBBB/______/______/WWWWWW/WWWWWW",
        "__BBBB/_BBBBB/______/_BW___/_WWWWW/___WWW",
        "B_B_B_/_W_B__/__BW__/_B__W_/W__W__/_W____",
    ] {
        let b: Board = text.parse().unwrap();
        for m in generate_moves(&b) {
            assert!(is_valid_move(&b, m), "{m} rejected on {text}");
        }
    }
}

#[test]
fn oracle_rejects_malformed_moves() {
    let b = Board::initial();
    assert!(!is_valid_raw(&b, (1, 0), (2, -1)));
    assert!(!is_valid_raw(&b, (-1, 0), (0, 0)));
    assert!(!is_valid_raw(&b, (5, 5), (6, 5)));
    // Two rows at once, sideways, and two columns over.
    assert!(!is_valid_raw(&b, (1, 0), (3, 0)));
    assert!(!is_valid_raw(&b, (1, 0), (1, 1)));
    assert!(!is_valid_raw(&b, (1, 0), (2, 2)));
    // Moving a White pawn is not a Black move.
    assert!(!is_valid_raw(&b, (4, 0), (5, 0)));
    assert!(is_valid_raw(&b, (1, 0), (2, 1)));
}

#[test]
fn white_moves_are_mapped_back_to_board_orientation() {
    let b: Board = "______/______/__B___/______/___W__/______".parse().unwrap();
    let white = legal_moves(&b, Side::White);
    assert_eq!(white, vec![mv((4, 3), (3, 3)), mv((4, 3), (3, 2)), mv((4, 3), (3, 4))]);
    assert_eq!(legal_moves(&b, Side::Black), generate_moves(&b));
}

#[test]
fn game_over_conditions() {
    assert!(!is_game_over(&Board::initial()));

    let black_home: Board = "______/______/______/______/___W__/B_____".parse().unwrap();
    assert!(is_game_over(&black_home));
    assert_eq!(winner(&black_home), Some(Side::Black));

    let white_home: Board = "W_____/__B___/______/______/______/______".parse().unwrap();
    assert!(is_game_over(&white_home));
    assert_eq!(winner(&white_home), Some(Side::White));

    let no_black: Board = "______/______/______/______/WWWWWW/WWWWWW".parse().unwrap();
    assert!(is_game_over(&no_black));
    assert_eq!(winner(&no_black), Some(Side::White));

    let no_white: Board = "BBBBBB/______/______/______/______/______".parse().unwrap();
    assert!(is_game_over(&no_white));
    assert_eq!(winner(&no_white), Some(Side::Black));

    assert!(is_game_over(&Board::empty()));
    assert_eq!(winner(&Board::empty()), None);
}
