//! clt - demo driver for the clt terminal toolkit
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Each subcommand exercises one part of the library against the real
//! terminal: `table` renders sample tables, `progress` runs an indicator
//! over simulated work and `styles` prints the style palette.

pub mod cmd;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "clt")]
#[command(author, version, about = "clt - styled tables and progress indicators")]
pub struct Cli {
    /// TOML file with [table] and [progress] settings
    #[arg(long, global = true, env = "CLT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render sample tables
    Table {
        /// Upper bound on table width
        #[arg(long)]
        max_width: Option<usize>,
        /// Spaces on each side of cell content
        #[arg(long)]
        padding: Option<usize>,
        /// Also render a table squeezed to 50 columns so its widest column wraps
        #[arg(long)]
        wrap: bool,
    },
    /// Run a progress indicator over simulated work
    Progress {
        /// Indicator to show
        #[arg(value_enum)]
        kind: ProgressKind,
        /// Finish with a failure instead of success
        #[arg(long)]
        fail: bool,
        /// How long the simulated work takes
        #[arg(long, default_value_t = 3000)]
        millis: u64,
    },
    /// Print every color and decoration
    Styles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProgressKind {
    Spinner,
    Bar,
    Loading,
    Incremental,
}
