//! Frame formatting for progress indicators.
//!
//! Pure string building, no I/O: the background task decides *when* to draw,
//! this decides *what* a frame looks like.

use super::LoadingStyle;
use crate::theme::Theme;
use unicode_width::UnicodeWidthStr;

/// Minimum filler between a spinner label and its glyph.
const MIN_FILLER: usize = 3;

#[derive(Debug, Clone)]
pub(crate) struct Painter {
    label: String,
    display_length: usize,
    theme: Theme,
}

impl Painter {
    pub(crate) fn new(label: &str, display_length: usize, theme: &Theme) -> Self {
        Self {
            label: label.to_string(),
            display_length,
            theme: theme.clone(),
        }
    }

    /// `label.....[|]`
    pub(crate) fn spinner(&self, tick: usize) -> String {
        let glyphs = &self.theme.glyphs.spinner;
        self.spinner_line(glyphs[tick % glyphs.len()])
    }

    /// `label.....[OK]` or `label.....[FAIL]`, status styled
    pub(crate) fn spinner_done(&self, ok: bool) -> String {
        let status = if ok {
            self.theme.styles.success.apply_to(self.theme.glyphs.ok)
        } else {
            self.theme.styles.failure.apply_to(self.theme.glyphs.fail)
        };
        self.spinner_line(&status)
    }

    fn spinner_line(&self, status: &str) -> String {
        let filler_len = self
            .display_length
            .saturating_sub(self.label.width())
            .max(MIN_FILLER);
        let filler: String = std::iter::repeat_n(self.theme.glyphs.filler, filler_len).collect();
        format!("{}{}[{}]", self.label, filler, status)
    }

    /// `label: [=====     ] 50%`
    pub(crate) fn bar(&self, fraction: f64) -> String {
        let fraction = clamp_fraction(fraction);
        let filled = ((fraction * self.display_length as f64).round() as usize)
            .min(self.display_length);
        let percent = (fraction * 100.0).round() as u32;
        format!(
            "{}: [{}{}] {:>2}%",
            self.label,
            repeat(self.theme.glyphs.bar_fill, filled),
            repeat(' ', self.display_length - filled),
            percent
        )
    }

    /// Full bar with a styled `100%`, or an `X` bar with a styled `FAIL`
    pub(crate) fn bar_done(&self, ok: bool) -> String {
        let (fill, status) = if ok {
            (
                self.theme.glyphs.bar_fill,
                self.theme.styles.success.apply_to("100%"),
            )
        } else {
            (
                self.theme.glyphs.bar_failed,
                self.theme.styles.failure.apply_to(self.theme.glyphs.fail),
            )
        };
        format!(
            "{}: [{}] {}",
            self.label,
            repeat(fill, self.display_length),
            status
        )
    }

    /// `label ...` with the animation frame for `tick`
    pub(crate) fn loading(&self, style: LoadingStyle, tick: usize) -> String {
        let frames: &[&str] = match style {
            LoadingStyle::Dots => &self.theme.glyphs.dots,
            LoadingStyle::Spinner => &self.theme.glyphs.spinner,
        };
        format!("{} {}", self.label, frames[tick % frames.len()])
    }
}

/// Clamp to `[0, 1]`; NaN counts as no progress.
pub(crate) fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

fn repeat(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}
