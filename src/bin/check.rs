use anyhow::Result;
use clap::Parser;
use pawnrace::agent::SearchAgent;
use pawnrace::config::Config;
use pawnrace::game::{public_test_positions, test_move};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "pawnrace-check", about = "Ask the engine for one move on each reference position and check it")]
struct Args {
    /// JSON config file (engine section is used)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time limit per position in milliseconds
    #[arg(long, default_value_t = 3050)]
    limit: u64,

    /// Engine soft time budget per move in milliseconds (overrides config)
    #[arg(long)]
    movetime: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut config = Config::load_or_default(args.config.as_ref())?;
    if let Some(ms) = args.movetime {
        config.engine.time_budget_ms = Some(ms);
    }
    config.game.move_timeout_ms = Some(args.limit);
    let limit = Duration::from_millis(args.limit);

    let mut failures = 0usize;
    for (i, board) in public_test_positions().iter().enumerate() {
        let agent = Box::new(SearchAgent::new(config.engine_params()));
        let check = test_move(board, agent, limit);
        let verdict = if check.passed() { "PASS" } else { "FAIL" };
        if !check.passed() {
            failures += 1;
        }
        println!(
            "case {}: {verdict} reply={:?} valid={} elapsed={:.3}s",
            i + 1,
            check.reply,
            check.valid,
            check.elapsed.as_secs_f64()
        );
    }
    if failures > 0 {
        anyhow::bail!("{failures} case(s) failed");
    }
    Ok(())
}
