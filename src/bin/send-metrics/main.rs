//! send-metrics
//!
//! Inserts one JSON metrics document into MongoDB.
//!
//! # Usage
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017 \
//! MONGODB_DB_NAME=ci \
//! MONGODB_COLLECTION_NAME=metrics \
//! METRICS_DATA='{"build": 42, "duration_ms": 1834}' \
//! send-metrics
//! ```

#![deny(unsafe_code)]

use std::process::ExitCode;

use anyhow::Result;
use bson::Bson;
use clap::Parser;
use send_metrics::cli::Cli;
use send_metrics::mongo::MongoConnector;
use send_metrics::{send_metrics, Config, SendReport};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to send metrics to MongoDB: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = Config::from_cli(args)?;

    match send_metrics(&config, &MongoConnector).await? {
        SendReport::Inserted { .. } => {}
        SendReport::DryRun { document } => {
            info!(
                database = %config.target.database,
                collection = %config.target.collection,
                "Dry run, nothing inserted"
            );
            println!("{}", Bson::Document(document).into_relaxed_extjson());
        }
    }

    Ok(())
}
