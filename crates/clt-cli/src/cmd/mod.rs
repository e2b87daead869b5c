pub mod progress;
pub mod styles;
pub mod table;

use anyhow::{Context, Result};
use clt::Config;
use std::path::Path;

/// Load `path` if given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(Config::default()),
    }
}
