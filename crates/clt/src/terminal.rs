//! Terminal size detection.
//!
//! The OS query goes through crossterm. When it fails (no TTY, redirected
//! output) or reports a zero dimension, layout falls back to 80x25.

use std::io;

/// Dimensions of the attached terminal, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
}

impl TerminalSize {
    /// Used whenever detection fails.
    pub const FALLBACK: Self = Self {
        width: 80,
        height: 25,
    };

    /// Explicit size, bypassing detection.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Query the terminal, falling back to [`TerminalSize::FALLBACK`].
    pub fn detect() -> Self {
        Self::from_probe(crossterm::terminal::size())
    }

    /// Interpret the result of a `(columns, rows)` probe.
    pub fn from_probe(probe: io::Result<(u16, u16)>) -> Self {
        match probe {
            Ok((w, h)) if w > 0 && h > 0 => Self::new(usize::from(w), usize::from(h)),
            Ok((w, h)) => {
                tracing::debug!(w, h, "terminal reported a zero dimension, using fallback");
                Self::FALLBACK
            }
            Err(e) => {
                tracing::debug!("terminal size unavailable ({e}), using fallback");
                Self::FALLBACK
            }
        }
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self::FALLBACK
    }
}
