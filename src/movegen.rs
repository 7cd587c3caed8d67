//! Legal move generation. Every routine here plays Black; White is handled by
//! generating on the inverted board (see [`legal_moves`]).

use crate::board::{Board, Cell, Coord, Move, Side, COLS, ROWS};

/// Straight, forward-left, forward-right. Search tie-breaking depends on this order.
const DIRECTIONS: [isize; 3] = [0, -1, 1];

pub fn generate_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(3 * COLS * 2);
    for from in board.pawns(Side::Black) {
        for dc in DIRECTIONS {
            let Some(to) = from.offset(1, dc) else { continue };
            let mv = Move::new(from, to);
            if destination_ok(board, mv) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Moves for either side, expressed in `board`'s own orientation.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    match side {
        Side::Black => generate_moves(board),
        Side::White => generate_moves(&board.inverted()).into_iter().map(Move::flipped).collect(),
    }
}

fn destination_ok(board: &Board, mv: Move) -> bool {
    match board.cell(mv.to) {
        Cell::Empty => true,
        Cell::White => mv.is_diagonal(),
        Cell::Black => false,
    }
}

/// Validity oracle for a Black move. Pure; never panics on a well-formed
/// [`Move`], whatever its coordinates.
pub fn is_valid_move(board: &Board, mv: Move) -> bool {
    is_valid_raw(
        board,
        (mv.from.row as isize, mv.from.col as isize),
        (mv.to.row as isize, mv.to.col as isize),
    )
}

/// Same oracle over raw signed pairs, for checking untrusted coordinates
/// before they are turned into a [`Coord`].
pub fn is_valid_raw(board: &Board, from: (isize, isize), to: (isize, isize)) -> bool {
    let (Some(from), Some(to)) = (to_coord(from), to_coord(to)) else {
        return false;
    };
    if board.cell(from) != Cell::Black {
        return false;
    }
    if to.row != from.row + 1 || to.col.abs_diff(from.col) > 1 {
        return false;
    }
    destination_ok(board, Move::new(from, to))
}

fn to_coord((row, col): (isize, isize)) -> Option<Coord> {
    Coord::new(usize::try_from(row).ok()?, usize::try_from(col).ok()?)
}

/// A Black pawn on the last row, a White pawn on the first row, or either
/// side wiped out.
pub fn is_game_over(board: &Board) -> bool {
    let rows = board.rows();
    rows[ROWS - 1].contains(&Cell::Black)
        || rows[0].contains(&Cell::White)
        || board.count(Side::Black) == 0
        || board.count(Side::White) == 0
}

/// The side a finished position favours. `None` while the game is running,
/// and for the degenerate board with no pawns at all.
pub fn winner(board: &Board) -> Option<Side> {
    let rows = board.rows();
    if rows[ROWS - 1].contains(&Cell::Black) {
        return Some(Side::Black);
    }
    if rows[0].contains(&Cell::White) {
        return Some(Side::White);
    }
    match (board.count(Side::Black), board.count(Side::White)) {
        (0, 0) => None,
        (0, _) => Some(Side::White),
        (_, 0) => Some(Side::Black),
        _ => None,
    }
}
