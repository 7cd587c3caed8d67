use crate::board::{Board, Cell, ROWS};

/// Positional score from Black's point of view: each Black pawn is worth its
/// row plus one, each White pawn the number of rows it still has in front of
/// Black's home row. One row of progress is worth exactly one point.
pub fn evaluate(board: &Board) -> i32 {
    board.iter().fold(0i32, |acc, (at, cell)| match cell {
        Cell::Black => acc + (at.row as i32 + 1),
        Cell::White => acc - (ROWS - at.row) as i32,
        Cell::Empty => acc,
    })
}

// Window bounds. Far outside any reachable evaluation (|score| <= 36 * 6).
pub const INF_SCORE: i32 = 30_000;
