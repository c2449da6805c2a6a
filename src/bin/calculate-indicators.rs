//! Calculate technical indicators
//!
//! Recomputes the indicator snapshot for every security from its stored
//! daily bars and prints before/after trend and signal labels.

use clap::Parser;
use dotenvy::dotenv;
use paperdesk::config::BatchConfig;
use paperdesk::db::PostgresStore;
use paperdesk::jobs::IndicatorBatch;
use paperdesk::logging;
use paperdesk::metrics::Metrics;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(author, version, about = "Calculate and update technical indicators for all stocks")]
struct Cli {
    /// Only process this symbol (repeatable)
    #[arg(long = "symbol", value_name = "SYMBOL")]
    symbols: Vec<String>,

    /// Number of most recent daily bars to load per security
    #[arg(long)]
    history_limit: Option<usize>,

    /// Compute and report without writing snapshots
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = BatchConfig::from_env()
        .with_symbols(cli.symbols)
        .with_dry_run(cli.dry_run);
    if let Some(limit) = cli.history_limit.filter(|&l| l > 0) {
        config = config.with_history_limit(limit);
    }

    let env = paperdesk::config::get_environment();
    info!(environment = %env, "Starting indicator calculation");

    let store = Arc::new(PostgresStore::new().await?);
    let metrics = Arc::new(Metrics::new()?);

    let batch = IndicatorBatch::new(store, config).with_metrics(metrics.clone());
    let report = batch.run().await?;

    for outcome in &report.outcomes {
        println!("  {}", outcome);
    }
    println!("{}", report.summary());

    if let Ok(exported) = metrics.export() {
        debug!(metrics = %exported, "Indicator batch metrics");
    }

    Ok(())
}
