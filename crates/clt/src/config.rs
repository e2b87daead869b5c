//! Configuration
//!
//! Tables and progress indicators work without any configuration. Callers
//! that want user-tunable layout embed [`Config`] in their own settings or
//! load it from a TOML file:
//!
//! ```toml
//! [table]
//! max_width = 100
//! padding = 2
//! justification = ["left", "right"]
//!
//! [progress]
//! display_length = 40
//! spinner_interval_ms = 100
//! loading_delay_ms = 300
//! ```

use crate::error::ConfigError;
use crate::table::{Justification, TableOption};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `[table]` section
    pub table: TableConfig,
    /// `[progress]` section
    pub progress: ProgressConfig,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Table layout overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Upper bound on table width (never raises the terminal width)
    pub max_width: Option<usize>,
    /// Maximum table height
    pub max_height: Option<usize>,
    /// Spaces on each side of cell content
    pub padding: Option<usize>,
    /// Per-column justification, in column order
    pub justification: Vec<Justification>,
}

impl TableConfig {
    /// The overrides as table construction options
    pub fn options(&self) -> Vec<TableOption> {
        [
            self.max_width.map(TableOption::MaxWidth),
            self.max_height.map(TableOption::MaxHeight),
            self.padding.map(TableOption::Padding),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Progress indicator overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressConfig {
    /// Width of the label-plus-filler (spinner) or bar body
    pub display_length: Option<usize>,
    /// Milliseconds between spinner and loading frames
    pub spinner_interval_ms: Option<u64>,
    /// Milliseconds a loading message stays hidden
    pub loading_delay_ms: Option<u64>,
}

impl ProgressConfig {
    /// Frame interval override
    pub fn interval(&self) -> Option<Duration> {
        self.spinner_interval_ms.map(Duration::from_millis)
    }

    /// Loading delay override
    pub fn loading_delay(&self) -> Option<Duration> {
        self.loading_delay_ms.map(Duration::from_millis)
    }
}
