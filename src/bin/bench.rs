use anyhow::Result;
use clap::Parser;
use pawnrace::{Board, SearchParams, Searcher};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "pawnrace-bench", version, about = "Benchmark search speed on one position")]
struct Args {
    /// Board with rows separated by '/', or 'startpos'
    #[arg(long, default_value = "startpos")]
    board: String,

    /// Movetime in milliseconds (ignored if depth is set)
    #[arg(long, default_value_t = 1000)]
    movetime: u64,

    /// Fixed search depth (overrides movetime when > 0)
    #[arg(long, default_value_t = 0)]
    depth: u32,

    /// Search without alpha-beta cutoffs
    #[arg(long, default_value_t = false)]
    no_pruning: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = if args.board == "startpos" { Board::initial() } else { args.board.parse::<Board>()? };

    let mut p = SearchParams::default();
    p.use_pruning = !args.no_pruning;
    if args.depth > 0 {
        p.depth = args.depth;
        p.movetime = None;
    } else {
        p.movetime = Some(Duration::from_millis(args.movetime));
    }

    let mut s = Searcher::new(p);
    let res = s.search_with_params(&board, p);
    let secs = res.elapsed.as_secs_f64();
    let nps = if secs > 0.0 { res.nodes as f64 / secs } else { 0.0 };
    println!(
        "bestmove={} score={} nodes={} elapsed={:.3}s nps={:.1}",
        res.best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
        res.score,
        res.nodes,
        secs,
        nps
    );
    Ok(())
}
