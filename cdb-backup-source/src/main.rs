//! cdb-backup-list - Main entry point
//!
//! Command-line front end for the backup list data source: runs one lookup
//! against the configured cloud API and prints the result as JSON.

use anyhow::{Context, Result};
use cdb_backup_source::{
    cloud::CdbClient,
    config::Config,
    lookup::{BackupListLookup, LookupRequest, DEFAULT_MAX_NUMBER},
    utils,
};
use clap::Parser;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Cloud MySQL instance identifier, e.g. cdb-abc123
    #[arg(short, long)]
    instance_id: String,

    /// Maximum number of backups to fetch (1-10000)
    #[arg(short, long, default_value_t = DEFAULT_MAX_NUMBER)]
    max_number: i64,

    /// Also write the record list to this file (best-effort)
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_file(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config.display()))?;

    let log_level = args.log_level.as_deref().unwrap_or(&config.log.level);
    utils::logger::init(log_level)?;

    tracing::info!(
        "Starting cdb-backup-list v{} (region: {})",
        env!("CARGO_PKG_VERSION"),
        config.api.region
    );

    let request = LookupRequest::new(args.instance_id, Some(args.max_number), args.output_file)?;

    let client = CdbClient::new(&config.api)?;
    let lookup = BackupListLookup::new(client);

    // Correlation id threaded through the lookup and attached to its logs
    let request_id = Uuid::new_v4();
    let result = lookup
        .lookup(request_id, &request)
        .await
        .context("backup list lookup failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
