use crate::board::{Board, Move, Side};
use crate::movegen::is_valid_move;

// Straight, then right, then left. Not the generator's order.
const FALLBACK_DIRECTIONS: [isize; 3] = [0, 1, -1];

/// First legal Black move in row-major order. `None` only when Black cannot
/// move at all.
pub fn first_legal_move(board: &Board) -> Option<Move> {
    board.pawns(Side::Black).find_map(|from| {
        FALLBACK_DIRECTIONS
            .iter()
            .filter_map(|&dc| from.offset(1, dc))
            .map(|to| Move::new(from, to))
            .find(|&mv| is_valid_move(board, mv))
    })
}
