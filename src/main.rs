//! macro-news-bot: economic-calendar impact analyzer.
//!
//! Single-binary Tokio application that:
//! 1. Fetches today's economic-calendar rows
//! 2. Normalizes and classifies EUR/USD releases
//! 3. Scores sentiment (optional)
//! 4. Derives a directional call for EUR/USD, NASDAQ and US30
//! 5. Prints the `{ events, verdict }` payload as JSON

mod config;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing::error;

use config::AppConfig;
use pipeline::Pipeline;

/// Economic-calendar market-impact analyzer.
#[derive(Debug, Parser)]
#[command(name = "macro-news-bot", about = "Economic-calendar market-impact analyzer")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Override analysis.strategy (rules | narrative).
    #[arg(long)]
    strategy: Option<String>,

    /// Override analysis.relevance_policy (broad | keyword).
    #[arg(long)]
    policy: Option<String>,

    /// Pretty-print the JSON payload.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(strategy) = cli.strategy {
        config.analysis.strategy = strategy;
    }
    if let Some(policy) = cli.policy {
        config.analysis.relevance_policy = policy;
    }

    let pipeline = Pipeline::from_config(&config)?;

    // The boundary never throws: acquisition failure becomes a structured
    // error payload, everything else degrades inside the pipeline.
    let payload = match pipeline.run_once().await {
        Ok(report) => serde_json::to_value(&report)?,
        Err(e) => {
            error!("Pipeline run failed: {}", e);
            json!({
                "error": "internal pipeline error",
                "details": e.to_string(),
            })
        }
    };

    if cli.pretty {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", serde_json::to_string(&payload)?);
    }

    Ok(())
}
