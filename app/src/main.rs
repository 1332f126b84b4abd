//! AI Exam Oracle - command-line exporter
//!
//! Renders an exam paper or analytics report from a JSON payload and
//! delivers it through the browser-style or native-style sink.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let report = commands::run(&cli).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.notification.message);
        if let store::ExportOutcome::Delivered(outcome) = &report.outcome {
            if let Some(uri) = outcome.uri() {
                println!("{}", uri);
            }
        }
    }

    if !report.is_saved() {
        std::process::exit(1);
    }
    Ok(())
}
