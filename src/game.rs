//! Turn loop between two agents. Each agent sees the board from its own side
//! (White gets the inverted board), runs on its own thread under a hard
//! timeout, and is replaced by the fallback move whenever its answer is
//! late, illegal, missing or the agent panics.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::board::{Board, Cell, Move, Side, ROWS};
use crate::config::DEFAULT_MOVE_TIMEOUT_MS;
use crate::movegen::{generate_moves, is_game_over, is_valid_move, winner};
use crate::search::fallback::first_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub move_timeout: Option<Duration>,
    /// Plies at the start of the game played at random instead of asked.
    pub opening_plies: usize,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { move_timeout: Some(Duration::from_millis(DEFAULT_MOVE_TIMEOUT_MS)), opening_plies: 0, seed: 42 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Substitution {
    Timeout,
    Invalid,
    NoMove,
    Crashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveSource {
    Agent,
    Opening,
    Fallback(Substitution),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    pub side: Side,
    /// In the orientation of the recorded boards, not the mover's view.
    pub mv: Move,
    pub source: MoveSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    ReachedEdge,
    Eliminated,
    /// The side to move had no legal move and forfeits.
    NoMoves,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub black: String,
    pub white: String,
    pub initial: Board,
    pub plies: Vec<Ply>,
    pub final_board: Board,
    pub winner: Option<Side>,
    pub reason: EndReason,
}

impl GameRecord {
    pub fn substitutions(&self, side: Side) -> usize {
        self.plies.iter().filter(|p| p.side == side && matches!(p.source, MoveSource::Fallback(_))).count()
    }
}

type SharedAgent = Arc<Mutex<Box<dyn Agent>>>;

struct Seat {
    name: String,
    agent: SharedAgent,
}

impl Seat {
    fn new(agent: Box<dyn Agent>) -> Self {
        Self { name: agent.name().to_string(), agent: Arc::new(Mutex::new(agent)) }
    }
}

/// What came back from an isolated agent call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Answered(Option<Move>),
    TimedOut,
    Crashed,
}

/// Runs one `make_move` on a fresh thread and waits at most `timeout`.
///
/// A timed-out call is abandoned, not killed: it keeps the agent locked until
/// it returns, so later calls to the same agent time out as well.
fn call_isolated(agent: &SharedAgent, board: Board, timeout: Option<Duration>) -> Reply {
    let (tx, rx) = mpsc::channel();
    let agent = Arc::clone(agent);
    let spawned = thread::Builder::new().name("agent-move".to_string()).spawn(move || {
        let mut guard = agent.lock().unwrap_or_else(PoisonError::into_inner);
        let mv = guard.make_move(&board);
        let _ = tx.send(mv);
    });
    if let Err(e) = spawned {
        warn!("failed to spawn agent thread: {e}");
        return Reply::Crashed;
    }
    match timeout {
        Some(t) => match rx.recv_timeout(t) {
            Ok(mv) => Reply::Answered(mv),
            Err(RecvTimeoutError::Timeout) => Reply::TimedOut,
            Err(RecvTimeoutError::Disconnected) => Reply::Crashed,
        },
        None => rx.recv().map_or(Reply::Crashed, Reply::Answered),
    }
}

fn checked(board: &Board, reply: Reply) -> Result<Move, Substitution> {
    match reply {
        Reply::TimedOut => Err(Substitution::Timeout),
        Reply::Crashed => Err(Substitution::Crashed),
        Reply::Answered(None) => Err(Substitution::NoMove),
        Reply::Answered(Some(mv)) if is_valid_move(board, mv) => Ok(mv),
        Reply::Answered(Some(_)) => Err(Substitution::Invalid),
    }
}

fn perspective(board: &Board, side: Side) -> Board {
    match side {
        Side::Black => *board,
        Side::White => board.inverted(),
    }
}

fn end_reason(board: &Board) -> EndReason {
    let rows = board.rows();
    if rows[ROWS - 1].contains(&Cell::Black) || rows[0].contains(&Cell::White) {
        EndReason::ReachedEdge
    } else {
        EndReason::Eliminated
    }
}

pub struct GameRunner {
    config: MatchConfig,
    black: Seat,
    white: Seat,
}

impl GameRunner {
    pub fn new(black: Box<dyn Agent>, white: Box<dyn Agent>, config: MatchConfig) -> Self {
        Self { config, black: Seat::new(black), white: Seat::new(white) }
    }

    fn seat(&self, side: Side) -> &Seat {
        match side {
            Side::Black => &self.black,
            Side::White => &self.white,
        }
    }

    /// Plays from `initial` with Black to move until the game is decided.
    pub fn play(&self, initial: Board) -> GameRecord {
        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let mut board = initial;
        let mut side = Side::Black;
        let mut plies: Vec<Ply> = Vec::new();

        let (winner, reason) = loop {
            if is_game_over(&board) {
                break (winner(&board), end_reason(&board));
            }
            let view = perspective(&board, side);
            let Some(fallback) = first_legal_move(&view) else {
                info!("{side} has no legal move and forfeits");
                break (Some(side.opponent()), EndReason::NoMoves);
            };

            let (mv, source) = if plies.len() < self.config.opening_plies {
                let mv = generate_moves(&view).choose(&mut rng).copied().unwrap_or(fallback);
                (mv, MoveSource::Opening)
            } else {
                let seat = self.seat(side);
                let started = Instant::now();
                let reply = call_isolated(&seat.agent, view, self.config.move_timeout);
                match checked(&view, reply) {
                    Ok(mv) => {
                        debug!("{side} ({}) plays {mv} in {:.3}s", seat.name, started.elapsed().as_secs_f64());
                        (mv, MoveSource::Agent)
                    }
                    Err(why) => {
                        warn!("{side} ({}) move replaced by fallback {fallback}: {why:?}", seat.name);
                        (fallback, MoveSource::Fallback(why))
                    }
                }
            };

            let mut next = view;
            next.play(mv);
            board = perspective(&next, side);
            let recorded = match side {
                Side::Black => mv,
                Side::White => mv.flipped(),
            };
            plies.push(Ply { side, mv: recorded, source });
            side = side.opponent();
        };

        let record = GameRecord {
            black: self.black.name.clone(),
            white: self.white.name.clone(),
            initial,
            plies,
            final_board: board,
            winner,
            reason,
        };
        info!(
            "{} (Black) vs {} (White): {} after {} plies ({:?}); substitutions black={} white={}",
            record.black,
            record.white,
            record.winner.map_or_else(|| "no winner".to_string(), |s| format!("{s} wins")),
            record.plies.len(),
            record.reason,
            record.substitutions(Side::Black),
            record.substitutions(Side::White),
        );
        record
    }
}

/// Result of asking one agent for one move on one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCheck {
    pub reply: Reply,
    pub elapsed: Duration,
    pub valid: bool,
    pub on_time: bool,
}

impl MoveCheck {
    pub fn passed(&self) -> bool {
        self.valid && self.on_time
    }
}

/// Asks `agent` (playing Black) for a move on `board` and checks the answer
/// is legal and arrived within `limit`.
pub fn test_move(board: &Board, agent: Box<dyn Agent>, limit: Duration) -> MoveCheck {
    let shared: SharedAgent = Arc::new(Mutex::new(agent));
    let started = Instant::now();
    let reply = call_isolated(&shared, *board, Some(limit));
    let elapsed = started.elapsed();
    let valid = checked(board, reply).is_ok();
    MoveCheck { reply, elapsed, valid, on_time: reply != Reply::TimedOut && elapsed <= limit }
}

/// Initial positions of the three public move-request checks.
pub fn public_test_positions() -> Vec<Board> {
    [
        "BBBBBB/_BBBBB/______/_B____/_WWWWW/WWWWWW",
        "_BBBBB/_BBBBB/______/_B____/WWWWWW/__WWWW",
        "__BBBB/_BBBBB/______/_BW___/_WWWWW/___WWW",
    ]
    .iter()
    .filter_map(|s| s.parse().ok())
    .collect()
}
