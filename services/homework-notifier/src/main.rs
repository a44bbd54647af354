//! Homework notifier CLI
//!
//! Command-line interface for the homework review status poller.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use homework_notifier::{load_config, Config, Credentials};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "homework-notifier")]
#[command(about = "Forwards homework review status changes to Telegram")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Poll interval in seconds (overrides config file)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    poll_interval: Option<u64>,

    /// Log file path (overrides config file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

fn init_logging(level: Level, log_file: Option<&PathBuf>) -> std::io::Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(fmt::layer())
        .with(file_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = if let Some(config_path) = &args.config {
        load_config(config_path)?
    } else {
        Config::default()
    };

    if let Some(poll_interval) = args.poll_interval {
        config.poll_interval_seconds = poll_interval;
    }
    if let Some(log_file) = args.log_file {
        config.log_file = Some(log_file);
    }

    init_logging(args.log_level, config.log_file.as_ref())?;

    tracing::debug!(
        "Parsed command line arguments: config={:?}, log_level={:?}",
        args.config,
        args.log_level
    );

    if dotenvy::dotenv().is_ok() {
        tracing::debug!("Loaded environment from .env");
    }
    let credentials = Credentials::from_env()?;

    tracing::info!("Starting homework notifier");
    tracing::debug!("Endpoint: {}", config.endpoint);

    homework_notifier::run(config, credentials).await?;

    Ok(())
}
