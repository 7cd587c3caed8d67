use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Move};
use crate::movegen::generate_moves;
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::fallback::first_legal_move;

/// Something that picks a move. The board is always presented with the
/// agent's own pawns as Black, moving toward higher rows.
pub trait Agent: Send {
    fn name(&self) -> &str;
    fn make_move(&mut self, board: &Board) -> Option<Move>;
}

pub struct SearchAgent {
    searcher: Searcher,
}

impl SearchAgent {
    pub fn new(params: SearchParams) -> Self {
        Self { searcher: Searcher::new(params) }
    }
}

impl Default for SearchAgent {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl Agent for SearchAgent {
    fn name(&self) -> &str {
        "alphabeta"
    }

    fn make_move(&mut self, board: &Board) -> Option<Move> {
        self.searcher.make_move(board)
    }
}

/// Always plays the first legal move.
#[derive(Default)]
pub struct FirstMoveAgent;

impl Agent for FirstMoveAgent {
    fn name(&self) -> &str {
        "naive"
    }

    fn make_move(&mut self, board: &Board) -> Option<Move> {
        first_legal_move(board)
    }
}

pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn make_move(&mut self, board: &Board) -> Option<Move> {
        generate_moves(board).choose(&mut self.rng).copied()
    }
}

/// Agent kinds selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Engine,
    Naive,
    Random,
}

impl AgentKind {
    pub fn build(self, params: SearchParams, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Engine => Box::new(SearchAgent::new(params)),
            AgentKind::Naive => Box::new(FirstMoveAgent),
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
        }
    }
}
