use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Move};
use crate::config::{DEFAULT_MOVE_TIMEOUT_MS, HARD_LIMIT_MARGIN_MS};
use crate::movegen::{generate_moves, is_game_over};
use crate::search::eval::{evaluate, INF_SCORE};

/// Depth ceiling. Out of reach within the time budget; the deadline is what
/// actually stops a search.
pub const DEFAULT_DEPTH: u32 = 20;
/// Soft budget, kept under the turn loop's default hard limit so a default
/// engine answers in time under a default [`MatchConfig`](crate::game::MatchConfig).
pub const DEFAULT_MOVETIME: Duration = Duration::from_millis(DEFAULT_MOVE_TIMEOUT_MS - HARD_LIMIT_MARGIN_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: u32,
    pub movetime: Option<Duration>,
    pub max_nodes: Option<u64>,
    /// `false` runs plain minimax over the same tree and ordering.
    pub use_pruning: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, movetime: Some(DEFAULT_MOVETIME), max_nodes: None, use_pruning: true }
    }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Minimax with alpha-beta pruning, always searching for Black. White's
/// replies are generated on the inverted board and inverted back.
pub struct Searcher {
    params: SearchParams,
    nodes: u64,
    node_limit: u64,
    deadline: Option<Instant>,
    use_pruning: bool,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0, node_limit: u64::MAX, deadline: None, use_pruning: true }
    }

    pub fn params(&self) -> SearchParams {
        self.params
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Engine entry point: best Black move on `board` under the configured
    /// params, or `None` when there is nothing to play.
    pub fn make_move(&mut self, board: &Board) -> Option<Move> {
        let params = self.params;
        self.search_with_params(board, params).best_move
    }

    /// Fixed-depth search with no deadline.
    pub fn search_depth(&mut self, board: &Board, depth: u32) -> SearchResult {
        let params = SearchParams { depth, movetime: None, max_nodes: None, use_pruning: true };
        self.search_with_params(board, params)
    }

    pub fn search_with_params(&mut self, board: &Board, params: SearchParams) -> SearchResult {
        let start = Instant::now();
        self.nodes = 0;
        self.node_limit = params.max_nodes.unwrap_or(u64::MAX);
        self.deadline = params.movetime.map(|d| start + d);
        self.use_pruning = params.use_pruning;

        let (score, best_move) = self.search_root(board, params.depth);
        let elapsed = start.elapsed();
        debug!(
            "search depth={} pruning={} nodes={} score={} best={} elapsed={:.3}s",
            params.depth,
            params.use_pruning,
            self.nodes,
            score,
            best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
            elapsed.as_secs_f64()
        );
        SearchResult { best_move, score, nodes: self.nodes, elapsed }
    }

    fn out_of_budget(&self) -> bool {
        if self.nodes >= self.node_limit {
            return true;
        }
        matches!(self.deadline, Some(dl) if Instant::now() >= dl)
    }

    // Checked on entry to every node, so an expired deadline costs at most one node.
    fn is_leaf(&self, board: &Board, depth: u32) -> bool {
        depth == 0 || is_game_over(board) || self.out_of_budget()
    }

    fn search_root(&mut self, board: &Board, depth: u32) -> (i32, Option<Move>) {
        self.nodes += 1;
        if self.is_leaf(board, depth) {
            return (evaluate(board), None);
        }
        let mut alpha = -INF_SCORE;
        let beta = INF_SCORE;
        let mut best = -INF_SCORE;
        let mut best_move = None;
        for mv in generate_moves(board) {
            let mut child = *board;
            child.play(mv);
            let score = self.min_node(&child, depth - 1, alpha, beta);
            // Ties keep the earlier move.
            if score > best {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best);
            if self.use_pruning && beta <= alpha {
                break;
            }
            if self.out_of_budget() {
                break;
            }
        }
        (best, best_move)
    }

    fn max_node(&mut self, board: &Board, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if self.is_leaf(board, depth) {
            return evaluate(board);
        }
        let mut best = -INF_SCORE;
        for mv in generate_moves(board) {
            let mut child = *board;
            child.play(mv);
            let score = self.min_node(&child, depth - 1, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(best);
            if self.use_pruning && beta <= alpha {
                break;
            }
            if self.out_of_budget() {
                break;
            }
        }
        best
    }

    fn min_node(&mut self, board: &Board, depth: u32, alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if self.is_leaf(board, depth) {
            return evaluate(board);
        }
        // White to move: generate as Black on the flipped board, flip each child back.
        let flipped = board.inverted();
        let mut best = INF_SCORE;
        for mv in generate_moves(&flipped) {
            let mut child = flipped;
            child.play(mv);
            child.invert();
            let score = self.max_node(&child, depth - 1, alpha, beta);
            best = best.min(score);
            beta = beta.min(best);
            if self.use_pruning && beta <= alpha {
                break;
            }
            if self.out_of_budget() {
                break;
            }
        }
        best
    }
}
