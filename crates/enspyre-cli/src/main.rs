//! Enspyre CLI
//!
//! Lead notebook and contact form for the Enspyre agency site.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use enspyre_cli::cli::Args;
use enspyre_cli::{EnspyreConfig, commands, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = EnspyreConfig::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = Some(dir);
    }

    logging::init(&config.logging, args.verbose);
    tracing::debug!(backend = %config.storage.backend, "configuration loaded");

    commands::run(args.command, &config, args.config.as_deref()).await?;
    Ok(())
}
