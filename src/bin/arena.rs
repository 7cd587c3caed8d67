use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pawnrace::agent::AgentKind;
use pawnrace::config::Config;
use pawnrace::game::{GameRecord, GameRunner};
use pawnrace::{Board, Side};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "pawnrace-arena", about = "Play a series of games: engine vs an opponent, alternating colours")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Opponent agent
    #[arg(long, value_enum, default_value = "random")]
    opponent: AgentKind,

    /// JSON config file (engine and game sections)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Engine soft time budget per move in milliseconds (overrides config)
    #[arg(long)]
    movetime: Option<u64>,

    /// Engine depth ceiling (overrides config)
    #[arg(long)]
    depth: Option<u32>,

    /// Random plies at the start of each game (both sides)
    #[arg(long)]
    opening_plies: Option<usize>,

    /// Games played concurrently; each search stays single-threaded
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Base random seed; game i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Optional: write summary JSON to this path
    #[arg(long)]
    json_out: Option<PathBuf>,

    /// Optional: write every game record as JSONL (one JSON per game)
    #[arg(long)]
    jsonl_out: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: usize,
    engine_wins: usize,
    opponent_wins: usize,
    no_result: usize,
    engine_wins_as_black: usize,
    engine_wins_as_white: usize,
    engine_substitutions: usize,
    opponent_substitutions: usize,
    avg_plies: f64,
    elapsed_s: f64,
}

fn engine_side(game_index: usize) -> Side {
    if game_index % 2 == 0 { Side::Black } else { Side::White }
}

fn summarize(records: &[(usize, GameRecord)], elapsed_s: f64) -> Summary {
    let mut s = Summary { games: records.len(), elapsed_s, ..Summary::default() };
    let mut plies = 0usize;
    for (i, r) in records {
        let me = engine_side(*i);
        plies += r.plies.len();
        s.engine_substitutions += r.substitutions(me);
        s.opponent_substitutions += r.substitutions(me.opponent());
        match r.winner {
            Some(w) if w == me => {
                s.engine_wins += 1;
                match me {
                    Side::Black => s.engine_wins_as_black += 1,
                    Side::White => s.engine_wins_as_white += 1,
                }
            }
            Some(_) => s.opponent_wins += 1,
            None => s.no_result += 1,
        }
    }
    if !records.is_empty() {
        s.avg_plies = plies as f64 / records.len() as f64;
    }
    s
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_ref())?;
    if let Some(ms) = args.movetime {
        config.engine.time_budget_ms = Some(ms);
    }
    if let Some(d) = args.depth {
        config.engine.depth = d;
    }
    if let Some(n) = args.opening_plies {
        config.game.opening_plies = n;
    }
    if let Some(seed) = args.seed {
        config.game.seed = seed;
    }
    let params = config.engine_params();

    let pb = ProgressBar::new(args.games as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} games {msg}")
            .context("progress bar template")?,
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.max(1))
        .build()
        .context("build game thread pool")?;

    let t0 = Instant::now();
    let records: Vec<(usize, GameRecord)> = pool.install(|| {
        (0..args.games)
            .into_par_iter()
            .map(|i| {
                let seed = config.game.seed.wrapping_add(i as u64);
                let engine = AgentKind::Engine.build(params, seed);
                let opponent = args.opponent.build(params, seed);
                let (black, white) = match engine_side(i) {
                    Side::Black => (engine, opponent),
                    Side::White => (opponent, engine),
                };
                let mut match_config = config.game.match_config();
                match_config.seed = seed;
                let record = GameRunner::new(black, white, match_config).play(Board::initial());
                pb.inc(1);
                (i, record)
            })
            .collect()
    });
    pb.finish_with_message("done");

    let summary = summarize(&records, t0.elapsed().as_secs_f64());
    println!(
        "games={} engine_wins={} opponent_wins={} no_result={} (as black {}, as white {}) substitutions engine={} opponent={} avg_plies={:.1} elapsed={:.1}s",
        summary.games,
        summary.engine_wins,
        summary.opponent_wins,
        summary.no_result,
        summary.engine_wins_as_black,
        summary.engine_wins_as_white,
        summary.engine_substitutions,
        summary.opponent_substitutions,
        summary.avg_plies,
        summary.elapsed_s
    );

    if let Some(path) = args.json_out {
        let text = serde_json::to_string_pretty(&summary)?;
        std::fs::write(&path, text).with_context(|| format!("write summary: {}", path.display()))?;
    }
    if let Some(path) = args.jsonl_out {
        let f = File::create(&path).with_context(|| format!("create {}", path.display()))?;
        let mut w = BufWriter::new(f);
        for (_, r) in &records {
            writeln!(w, "{}", serde_json::to_string(r)?)?;
        }
        w.flush()?;
    }
    Ok(())
}
