use anyhow::{bail, Result};
use clap::Parser;
use pawnrace::agent::{Agent, AgentKind};
use pawnrace::config::Config;
use pawnrace::game::GameRunner;
use pawnrace::{generate_moves, Board, Move, Side};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a game of 6x6 pawn race", long_about = None)]
struct Args {
    /// Agent playing Black
    #[arg(long, value_enum, default_value = "engine")]
    black: AgentKind,

    /// Agent playing White
    #[arg(long, value_enum, default_value = "naive")]
    white: AgentKind,

    /// Take one side yourself: 'b' for Black, 'w' for White
    #[arg(long)]
    human: Option<String>,

    /// Starting board, rows separated by '/', e.g. BBBBBB/BBBBBB/______/______/WWWWWW/WWWWWW
    #[arg(long)]
    board: Option<String>,

    /// JSON config file (engine and game sections)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Engine depth ceiling (overrides config)
    #[arg(long)]
    depth: Option<u32>,

    /// Engine soft time budget per move in milliseconds (overrides config)
    #[arg(long)]
    movetime: Option<u64>,

    /// Hard limit per move request in milliseconds, 0 disables (overrides config)
    #[arg(long)]
    move_timeout: Option<u64>,

    /// Seed for the random agent and random opening plies
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_side(side_str: &str) -> Result<Side> {
    match side_str.to_lowercase().as_str() {
        "b" | "black" => Ok(Side::Black),
        "w" | "white" => Ok(Side::White),
        _ => bail!("Invalid side: use 'b' or 'w'"),
    }
}

/// Reads moves from stdin. Sees the board from its own side like any agent,
/// so it shows and parses moves in that orientation.
struct HumanAgent;

impl Agent for HumanAgent {
    fn name(&self) -> &str {
        "human"
    }

    fn make_move(&mut self, board: &Board) -> Option<Move> {
        let legal = generate_moves(board);
        if legal.is_empty() {
            return None;
        }
        println!("\nYour pawns are B and move down the board:\n{board}");
        loop {
            print!("Enter your move (e.g. 1,2 2,2): ");
            io::stdout().flush().ok()?;
            let mut input = String::new();
            if io::stdin().read_line(&mut input).ok()? == 0 {
                return None;
            }
            match input.trim().parse::<Move>() {
                Ok(mv) if legal.contains(&mv) => return Some(mv),
                Ok(_) => {
                    println!("Illegal move! Legal moves are:");
                    let list: Vec<String> = legal.iter().map(|m| m.to_string()).collect();
                    println!("{}", list.join("  "));
                }
                Err(e) => println!("{e}"),
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_ref())?;
    if let Some(d) = args.depth {
        config.engine.depth = d;
    }
    if let Some(ms) = args.movetime {
        config.engine.time_budget_ms = Some(ms);
    }
    if let Some(ms) = args.move_timeout {
        config.game.move_timeout_ms = (ms > 0).then_some(ms);
    }
    if let Some(seed) = args.seed {
        config.game.seed = seed;
    }
    let human = args.human.as_deref().map(parse_side).transpose()?;
    if human.is_some() {
        // Humans think slower than any sensible hard limit.
        config.game.move_timeout_ms = None;
    }

    let board = match args.board {
        Some(ref s) => s.parse::<Board>()?,
        None => Board::initial(),
    };

    let params = config.engine_params();
    let seat = |side: Side, kind: AgentKind, seed: u64| -> Box<dyn Agent> {
        if human == Some(side) {
            Box::new(HumanAgent)
        } else {
            kind.build(params, seed)
        }
    };
    let black = seat(Side::Black, args.black, config.game.seed);
    let white = seat(Side::White, args.white, config.game.seed.wrapping_add(1));

    println!("Starting position:\n{board}");
    let runner = GameRunner::new(black, white, config.game.match_config());
    let record = runner.play(board);

    println!("\nFinal position after {} plies:\n{}", record.plies.len(), record.final_board);
    match record.winner {
        Some(side) => println!("{side} wins ({:?})", record.reason),
        None => println!("No winner ({:?})", record.reason),
    }
    println!(
        "Fallback moves substituted: Black({}) {}, White({}) {}",
        record.black,
        record.substitutions(Side::Black),
        record.white,
        record.substitutions(Side::White)
    );
    Ok(())
}
