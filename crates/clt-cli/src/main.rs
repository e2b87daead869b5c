//! clt - demo driver CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clt_cli::cmd;
use clt_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so they never tear a progress line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cmd::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Table {
            max_width,
            padding,
            wrap,
        } => cmd::table::table(&config, max_width, padding, wrap),
        Commands::Progress { kind, fail, millis } => {
            cmd::progress::progress(&config, kind, fail, millis)
        }
        Commands::Styles => cmd::styles::styles(),
    }
}
