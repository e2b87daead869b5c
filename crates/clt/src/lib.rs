//! clt - Command-Line Toolkit
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Building blocks for terminal programs that print more than plain lines.
//!
//! # Overview
//!
//! - [`style`]: ANSI SGR styles composed from colors and decorations.
//! - [`table`]: tables that lay themselves out within the terminal width,
//!   wrapping the widest column when everything does not fit.
//! - [`progress`]: spinners, bars and delayed loading messages redrawn in
//!   place by a background thread.
//! - [`output`]: a small builder for multi-line messages.
//!
//! # Architecture
//!
//! - **Pure rendering**: tables render to a `String`; progress frames are
//!   formatted separately from the thread that writes them.
//! - **Single writer**: each running indicator owns its output on a dedicated
//!   thread and is driven through a rendezvous channel, so frames never tear
//!   and `success()`/`fail()` return only after the final line is drawn.
//! - **Lenient input**: malformed table rows are truncated or padded and
//!   progress misuse is logged and ignored rather than returned as errors.

pub mod buffer;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;
pub mod style;
pub mod table;
pub mod terminal;
pub mod theme;

pub use config::Config;
pub use error::ConfigError;
pub use output::Output;
pub use progress::{LoadingStyle, Progress, ProgressHandle, ProgressState};
pub use style::{Color, Decoration, Style, styled};
pub use table::{Cell, Justification, Table, TableOption};
pub use terminal::TerminalSize;
pub use theme::Theme;
