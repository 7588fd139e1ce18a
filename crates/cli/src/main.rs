//! # gcloud-helpers CLI
//!
//! Runs any of the sheet or bucket helpers from the command line.

mod bucket;
mod sheet;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gcloud_helpers::{get_config, CloudClients};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a YAML config file. Defaults to `gcloud-helpers.yml` if present.
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read or write Google Sheets ranges
    Sheet(sheet::SheetArgs),
    /// Manage objects in a Cloud Storage bucket
    Bucket(bucket::BucketArgs),
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("Command failed: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<()> {
    let config = get_config(cli.config.as_deref())?;
    info!("Using Sheets API at {}", config.sheets_api_url);
    let clients = CloudClients::from_config(&config)?;

    match &cli.command {
        Commands::Sheet(args) => sheet::handle_sheet(clients.sheets.as_ref(), args).await,
        Commands::Bucket(args) => bucket::handle_bucket(clients.storage.as_ref(), args).await,
    }
}
