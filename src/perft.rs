use crate::board::{Board, Move};
use crate::movegen::{generate_moves, is_game_over};

/// Leaf count of the full move tree, Black to move at the root. Sides
/// alternate by inverting the board after every ply, so one generator
/// serves both colours. Finished games are not expanded.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if is_game_over(board) {
        return 0;
    }
    let moves = generate_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for m in moves {
        let mut child = *board;
        child.play(m);
        child.invert();
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Per-move breakdown of [`perft`] at the root.
pub fn perft_divide(board: &Board, depth: u32) -> Vec<(Move, u64)> {
    generate_moves(board)
        .into_iter()
        .map(|m| {
            let mut child = *board;
            child.play(m);
            child.invert();
            (m, perft(&child, depth.saturating_sub(1)))
        })
        .collect()
}
