//! Cairn daemon: entry point for running a range-processor sync session.
//!
//! Simulates a set of peers reporting identical block batches and logs the
//! active range as finalization pushes it forward. Settings come from CLI
//! flags and environment variables, optionally layered over a TOML file.

use cairn_sync::{init_logging, LogFormat, RangeProcessor, SyncConfig};
use cairn_types::{Block, ProcessorParams};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cairn-daemon", about = "Cairn range processor daemon")]
struct Cli {
    /// Number of heights in the active window.
    #[arg(long, env = "CAIRN_WINDOW_SIZE")]
    window_size: Option<u64>,

    /// Peer submissions required before a height finalizes.
    #[arg(long, env = "CAIRN_QUORUM_THRESHOLD")]
    quorum_threshold: Option<u64>,

    /// Height the window starts at.
    #[arg(long, env = "CAIRN_START_HEIGHT")]
    start_height: Option<i64>,

    /// Number of simulated peers reporting each batch.
    #[arg(long, default_value_t = 3, env = "CAIRN_PEERS")]
    peers: u64,

    /// Number of window-sized batches to replay.
    #[arg(long, default_value_t = 3, env = "CAIRN_ROUNDS")]
    rounds: u64,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "CAIRN_LOG_LEVEL")]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "CAIRN_LOG_FORMAT")]
    log_format: String,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => SyncConfig::from_toml_file(path)?,
        None => SyncConfig::default(),
    };

    let config = SyncConfig {
        params: ProcessorParams::new(
            cli.window_size.unwrap_or(base.params.window_size),
            cli.quorum_threshold.unwrap_or(base.params.quorum_threshold),
        ),
        start_height: cli.start_height.unwrap_or(base.start_height),
        log_format: cli.log_format,
        log_level: cli.log_level,
    };

    init_logging(LogFormat::from_name(&config.log_format), &config.log_level);

    let processor = RangeProcessor::with_params(config.params, config.start_height);
    let range = processor.active_range();
    tracing::info!(
        min_height = range.min,
        max_height = range.max,
        quorum_threshold = processor.quorum_threshold(),
        peers = cli.peers,
        "sync session starting"
    );

    for round in 0..cli.rounds {
        let range = processor.active_range();
        let blocks: Vec<Block> = (range.min..=range.max)
            .map(|h| Block::new(format!("block_{h}")))
            .collect();

        for _ in 0..cli.peers {
            processor.process_range(range.min, blocks.clone()).await;
        }

        let after = processor.active_range();
        tracing::info!(
            round,
            min_height = after.min,
            max_height = after.max,
            "round complete"
        );
    }

    let metrics = processor.metrics();
    tracing::info!(
        accepted = metrics.submissions_accepted.get(),
        discarded = metrics.submissions_discarded.get(),
        finalized = metrics.heights_finalized.get(),
        "sync session finished"
    );

    Ok(())
}
