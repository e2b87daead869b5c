//! Column-width layout
//!
//! Each render measures every column's natural width, then tries the layout
//! strategies in a fixed order until one accepts the table:
//!
//! 1. [`Strategy::Simple`] - everything fits at natural width.
//! 2. [`Strategy::WrapWidest`] - the widest column wraps to whatever space the
//!    others leave, provided that keeps at least half its natural width.
//! 3. [`Strategy::Overflow`] - natural widths regardless; the terminal
//!    hard-wraps. Always accepts.

use super::{Cell, Column, Row};
use unicode_width::UnicodeWidthStr;

/// A column-width layout strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// All columns at natural width within the budget
    Simple,
    /// The widest column wrapped to fit the budget
    WrapWidest,
    /// All columns at natural width, exceeding the budget
    Overflow,
}

impl Strategy {
    /// The order strategies are tried in.
    pub const ORDER: [Self; 3] = [Self::Simple, Self::WrapWidest, Self::Overflow];

    /// Assign computed widths if this strategy accepts the table.
    fn apply(self, columns: &mut [Column], pad: usize, max_width: usize) -> bool {
        match self {
            Self::Simple => simple(columns, pad, max_width),
            Self::WrapWidest => wrap_widest(columns, pad, max_width),
            Self::Overflow => overflow(columns),
        }
    }
}

/// Measure natural widths and run the strategies. Returns the one used.
///
/// # Panics
///
/// If no strategy accepts the table. [`Strategy::Overflow`] always accepts,
/// so this only fires on a broken strategy list.
pub(super) fn compute_col_widths(
    columns: &mut [Column],
    headers: &[Cell],
    rows: &[Row],
    pad: usize,
    max_width: usize,
) -> Strategy {
    compute_natural_widths(columns, headers, rows);
    for col in &mut *columns {
        col.wrap = false;
    }

    let Some(strategy) = Strategy::ORDER
        .into_iter()
        .find(|s| s.apply(columns, pad, max_width))
    else {
        tracing::error!(columns = columns.len(), max_width, "layout strategies exhausted");
        panic!(
            "no table layout strategy accepted {} columns within width {max_width}",
            columns.len()
        );
    };

    tracing::debug!(
        ?strategy,
        widths = ?columns.iter().map(|c| c.computed_width).collect::<Vec<_>>(),
        "table layout"
    );
    strategy
}

fn compute_natural_widths(columns: &mut [Column], headers: &[Cell], rows: &[Row]) {
    for (i, col) in columns.iter_mut().enumerate() {
        let header = headers.get(i).map_or(0, |h| h.value.width());
        col.natural_width = rows
            .iter()
            .filter_map(|row| row.cells.get(i))
            .map(Cell::width)
            .fold(header, usize::max);
    }
}

fn simple(columns: &mut [Column], pad: usize, max_width: usize) -> bool {
    let total: usize = columns.iter().map(|c| c.natural_width + 2 * pad).sum();
    if total > max_width {
        return false;
    }
    for col in &mut *columns {
        col.computed_width = col.natural_width;
    }
    true
}

fn wrap_widest(columns: &mut [Column], pad: usize, max_width: usize) -> bool {
    let Some(widest) = widest_column(columns) else {
        return false;
    };
    let natural = columns[widest].natural_width;
    if natural == 0 {
        return false;
    }

    let budget = max_width as i64 - (2 * pad * columns.len()) as i64;
    let others: usize = columns
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != widest)
        .map(|(_, c)| c.natural_width)
        .sum();
    let wrap_width = budget - others as i64;

    // wrap_width / natural >= 0.5
    if wrap_width <= 0 || 2 * wrap_width < natural as i64 {
        return false;
    }

    for (i, col) in columns.iter_mut().enumerate() {
        if i == widest {
            col.computed_width = wrap_width as usize;
            col.wrap = true;
        } else {
            col.computed_width = col.natural_width;
        }
    }
    true
}

fn overflow(columns: &mut [Column]) -> bool {
    for col in &mut *columns {
        col.computed_width = col.natural_width;
    }
    true
}

/// Index of the first column with the largest natural width.
fn widest_column(columns: &[Column]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (i, col) in columns.iter().enumerate() {
        if best.is_none_or(|(_, w)| col.natural_width > w) {
            best = Some((i, col.natural_width));
        }
    }
    best.map(|(i, _)| i)
}
