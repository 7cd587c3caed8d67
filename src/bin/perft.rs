use anyhow::Result;
use clap::Parser;
use pawnrace::perft::{perft, perft_divide};
use pawnrace::Board;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pawnrace-perft", about = "Count move-tree leaves to verify the move generator")]
struct Args {
    /// Board with rows separated by '/', or 'startpos'
    #[arg(long, default_value = "startpos")]
    board: String,

    /// Maximum depth; every depth from 1 up to this is reported
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Print the per-move breakdown at the maximum depth
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "startpos" { Board::initial() } else { args.board.parse::<Board>()? };

    for d in 1..=args.depth {
        let t0 = Instant::now();
        let nodes = perft(&board, d);
        let dt = t0.elapsed().as_secs_f64();
        let nps = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
        println!("depth {d}: {nodes} nodes in {dt:.3}s ({nps:.0} nps)");
    }
    if args.divide && args.depth > 0 {
        for (m, n) in perft_divide(&board, args.depth) {
            println!("{m}: {n}");
        }
    }
    Ok(())
}
