//! Match simulator CLI - plays whole matches between random-legal bots
//! through the room service and reports how often each team wins.

mod metrics;
mod simulator;
mod types;

use std::time::Instant;

use bringten_backend::telemetry::{init_tracing, LogFormat};
use bringten_backend::{EngineConfig, RoomService};
use clap::Parser;
use metrics::Summary;
use simulator::Simulator;
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "Plays Bring Ten matches between random-legal bots")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "100")]
    matches: u32,

    /// Seed for deals and bot choices (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Points a team needs to win
    #[arg(long)]
    score_limit: Option<u16>,

    /// Cards dealt to each player per round
    #[arg(long)]
    hand_size: Option<u8>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit engine logs in this format (json|compact, level from RUST_LOG)
    #[arg(long, conflicts_with = "verbose")]
    log_format: Option<LogFormat>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(format) = args.log_format {
        init_tracing(format)?;
    } else {
        // Silent by default, only show warnings/errors
        let filter = if args.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    // Environment first, flags override it.
    let mut config = EngineConfig::from_env()?;
    if let Some(limit) = args.score_limit {
        config.win_threshold = limit;
    }
    if let Some(size) = args.hand_size {
        config.hand_size = size;
    }
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, matches = args.matches, "Starting simulation");

    let service = RoomService::with_seed(config, seed);
    let mut simulator = Simulator::new(&service, seed);
    let mut summary = Summary::default();

    let start = Instant::now();
    for match_no in 1..=args.matches {
        match simulator.play_match(match_no) {
            Ok(result) => {
                if matches!(args.format, OutputFormat::Jsonl) {
                    println!("{}", serde_json::to_string(&result)?);
                }
                summary.record(&result);
            }
            Err(e) => {
                summary.record_error();
                warn!(match_no, error = %e, "Match failed");
            }
        }
    }
    summary.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    match args.format {
        OutputFormat::Text => summary.print(args.matches),
        OutputFormat::Jsonl => println!("{}", serde_json::to_string(&summary)?),
    }

    if summary.errors > 0 {
        return Err(format!("{} matches failed", summary.errors).into());
    }
    Ok(())
}
