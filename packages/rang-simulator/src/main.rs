//! Rang simulator CLI: runs computer-only hands in memory and reports the
//! contracts, tricks and scores they produce.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use metrics::SimulationSummary;
use output::OutputWriter;
use rang_engine::telemetry::{init_tracing, LogFormat};
use simulator::Simulator;
use tracing::{info, warn};
use types::{AiType, OutputFormat};

#[derive(Parser)]
#[command(name = "rang-simulator")]
#[command(about = "Headless Rang simulator for comparing computer players")]
struct Args {
    /// Number of hands to play
    #[arg(short = 'n', long, default_value = "1")]
    hands: u32,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0 (South)
    #[arg(long, default_value = "heuristic")]
    seat0: AiType,

    /// AI type for seat 1 (East)
    #[arg(long, default_value = "heuristic")]
    seat1: AiType,

    /// AI type for seat 2 (North)
    #[arg(long, default_value = "heuristic")]
    seat2: AiType,

    /// AI type for seat 3 (West)
    #[arg(long, default_value = "heuristic")]
    seat3: AiType,

    /// Game seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    format: OutputFormat,

    /// Write records here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the records.
    let filter = if args.verbose { "debug" } else { "warn" };
    init_tracing(LogFormat::Text, filter);

    let seat_types = match args.seats {
        Some(ai) => [ai; 4],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    info!(?seat_types, hands = args.hands, seed = ?args.seed, "Starting simulation");

    let mut simulator = Simulator::new(seat_types, args.seed)?;
    let mut writer = OutputWriter::new(args.output.as_deref(), args.format)?;
    let mut summary = SimulationSummary::default();

    let start = Instant::now();
    for _ in 0..args.hands {
        let hand = match simulator.play_hand() {
            Ok(hand) => hand,
            Err(e) => {
                warn!(error = %e, "Simulation stopped early");
                break;
            }
        };
        info!(
            hand_no = hand.hand_no,
            contract = hand.contract,
            made = hand.made,
            scores = ?hand.scores,
            "Hand complete"
        );
        writer.write_hand(&hand)?;
        summary.record(&hand);
    }

    if let Some(path) = writer.path() {
        info!("Results written to: {}", path.display());
    }
    writer.finish(&summary)?;

    info!(
        game_seed = simulator.game_seed(),
        hands = summary.hands,
        elapsed = ?start.elapsed(),
        leader = ?summary.leader(),
        "Simulation finished"
    );
    Ok(())
}
