//! Theme - Design system constants
//!
//! This module defines the visual defaults shared by tables and progress
//! indicators:
//! - Styles for titles, headers, cells and final statuses
//! - Glyphs for spinners, loading messages and bars
//!
//! Everything here is an immutable value. Build a [`Theme`] once and pass it
//! around by value; there is nothing to synchronize.

use crate::style::{Color, Decoration, Style};

/// Default theme for tables and progress indicators
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    /// Styles for the different UI elements
    pub styles: StyleScheme,
    /// Animation and fill glyphs
    pub glyphs: Glyphs,
}

/// Style scheme for UI elements
#[derive(Debug, Clone, PartialEq)]
pub struct StyleScheme {
    /// Table titles
    pub title: Style,
    /// Column headers
    pub header: Style,
    /// Default column style
    pub cell: Style,
    /// Success states ("OK", "100%")
    pub success: Style,
    /// Failure states ("FAIL")
    pub failure: Style,
}

impl Default for StyleScheme {
    fn default() -> Self {
        Self {
            title: Style::from(Decoration::Bold),
            header: Style::compose([Decoration::Bold, Decoration::Underline]),
            cell: Style::from(Color::Default),
            success: Style::from(Color::Green),
            failure: Style::from(Color::Red),
        }
    }
}

/// Glyphs used by progress indicators
#[derive(Debug, Clone, PartialEq)]
pub struct Glyphs {
    /// Spinner frames, one per tick
    pub spinner: [&'static str; 4],
    /// Loading-message frames for [`LoadingStyle::Dots`](crate::progress::LoadingStyle::Dots)
    pub dots: [&'static str; 4],
    /// Padding between a spinner label and its glyph
    pub filler: char,
    /// Filled part of a bar
    pub bar_fill: char,
    /// Fill of a failed bar
    pub bar_failed: char,
    /// Spinner success status
    pub ok: &'static str,
    /// Failure status for spinners and bars
    pub fail: &'static str,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            spinner: ["|", "/", "-", "\\"],
            dots: ["   ", ".  ", ".. ", "..."],
            filler: '.',
            bar_fill: '=',
            bar_failed: 'X',
            ok: "OK",
            fail: "FAIL",
        }
    }
}
