// 6x6 pawn race: board model, Black-only movegen with perspective inversion,
// time-bounded alpha-beta, and the turn loop that drives two agents.
pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod search;

pub use board::{Board, Cell, Coord, Move, Side, COLS, ROWS};
pub use movegen::{generate_moves, is_game_over, is_valid_move, legal_moves};
pub use search::alphabeta::{SearchParams, SearchResult, Searcher};
pub use search::eval::evaluate;
pub use search::fallback::first_legal_move;
