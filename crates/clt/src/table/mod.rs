//! Table Rendering - adaptive column layout
//!
//! A [`Table`] owns a title, a header row and data rows. Rendering measures
//! the content, picks a [`Strategy`] that fits the terminal width, wraps the
//! cells of a wrapping column across several lines, and returns one styled,
//! multi-line string.
//!
//! Construction is lenient: rows with too many values are truncated, rows
//! with too few are padded with empty cells, and extra headers, styles or
//! justifications beyond the column count are ignored.
//!
//! ```
//! use clt::style::{Color, Style};
//! use clt::table::{Cell, Table};
//!
//! let mut table = Table::new(2);
//! table
//!     .set_title("Styled Example Table")
//!     .set_headers(["Status", "Reason"])
//!     .set_column_styles([Style::from(Color::Green), Style::from(Color::Default)])
//!     .add_row(["OK", "Everything worked"])
//!     .add_styled_row([
//!         Cell::styled("FAIL", Style::from(Color::Red)),
//!         Cell::new("Something bad happened"),
//!     ]);
//! let rendered = table.render();
//! assert!(rendered.contains("Everything worked"));
//! ```

mod justify;
mod layout;
mod wrap;

pub use justify::{Justification, justify};
pub use layout::Strategy;
pub use wrap::{BREAKPOINTS, wrap};

use crate::style::Style;
use crate::terminal::TerminalSize;
use crate::theme::Theme;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Spaces on each side of cell content unless overridden.
pub const DEFAULT_PADDING: usize = 1;

/// A single cell. A cell without a style of its own takes its column's.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    value: String,
    width: usize,
    style: Option<Style>,
}

impl Cell {
    /// Unstyled cell (renders with the column style)
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            width: value.width(),
            value,
            style: None,
        }
    }

    /// Cell whose style overrides the column style
    pub fn styled(value: impl Into<String>, style: Style) -> Self {
        Self {
            style: Some(style),
            ..Self::new(value)
        }
    }

    fn empty() -> Self {
        Self::new(String::new())
    }

    /// Raw content
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Unwrapped display width of the content
    pub fn width(&self) -> usize {
        self.width
    }

    /// Style override, if any
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }
}

/// A column's settings and, after a render, its layout
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    index: usize,
    natural_width: usize,
    computed_width: usize,
    wrap: bool,
    style: Style,
    justification: Justification,
}

impl Column {
    fn new(index: usize) -> Self {
        Self {
            index,
            natural_width: 0,
            computed_width: 0,
            wrap: false,
            style: Theme::default().styles.cell,
            justification: Justification::Left,
        }
    }

    /// Position in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Widest cell in the column, header included
    pub fn natural_width(&self) -> usize {
        self.natural_width
    }

    /// Width assigned by the last layout
    pub fn computed_width(&self) -> usize {
        self.computed_width
    }

    /// Whether the last layout wraps this column
    pub fn wraps(&self) -> bool {
        self.wrap
    }

    /// Default style for the column's cells
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Placement of content in the column
    pub fn justification(&self) -> Justification {
        self.justification
    }
}

/// A row of cells, always exactly one per column
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Truncate or pad `cells` to `columns` entries.
    fn fit(cells: impl IntoIterator<Item = Cell>, columns: usize) -> Self {
        let mut cells: Vec<Cell> = cells.into_iter().take(columns).collect();
        cells.resize_with(columns, Cell::empty);
        Self { cells }
    }

    /// The row's cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Table construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOption {
    /// Cap the table width. Only ever lowers the detected terminal width.
    MaxWidth(usize),
    /// Maximum table height
    MaxHeight(usize),
    /// Spaces on each side of cell content
    Padding(usize),
}

impl TableOption {
    fn apply(self, table: &mut Table) {
        match self {
            Self::MaxWidth(w) => table.max_width = table.max_width.min(w),
            Self::MaxHeight(h) => table.max_height = h,
            Self::Padding(p) => table.pad = p,
        }
    }
}

/// A console table with automatic column sizing
#[derive(Debug, Clone)]
pub struct Table {
    title: Cell,
    columns: Vec<Column>,
    headers: Vec<Cell>,
    rows: Vec<Row>,
    pad: usize,
    max_width: usize,
    max_height: usize,
    theme: Theme,
    strategy: Option<Strategy>,
}

impl Table {
    /// A table of `columns` columns sized to the current terminal
    pub fn new(columns: usize) -> Self {
        Self::with_options(columns, std::iter::empty())
    }

    /// A table sized to the current terminal, then adjusted by `options`
    pub fn with_options(columns: usize, options: impl IntoIterator<Item = TableOption>) -> Self {
        Self::with_size(columns, TerminalSize::detect(), options)
    }

    /// A table sized to `size` instead of the detected terminal
    pub fn with_size(
        columns: usize,
        size: TerminalSize,
        options: impl IntoIterator<Item = TableOption>,
    ) -> Self {
        let theme = Theme::default();
        let mut table = Self {
            title: Cell::styled("", theme.styles.title.clone()),
            columns: (0..columns).map(Column::new).collect(),
            headers: (0..columns)
                .map(|_| Cell::styled("", theme.styles.header.clone()))
                .collect(),
            rows: Vec::new(),
            pad: DEFAULT_PADDING,
            max_width: size.width,
            max_height: size.height,
            theme,
            strategy: None,
        };
        for option in options {
            option.apply(&mut table);
        }
        table
    }

    /// Set the title, styled bold
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        let style = self.theme.styles.title.clone();
        self.set_title_styled(title, style)
    }

    /// Set the title with a custom style
    pub fn set_title_styled(&mut self, title: impl Into<String>, style: Style) -> &mut Self {
        self.title = Cell::styled(title, style);
        self
    }

    /// Set column headers, styled bold and underlined. Extra labels are
    /// ignored.
    pub fn set_headers<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (header, label) in self.headers.iter_mut().zip(labels) {
            *header = Cell::styled(label, self.theme.styles.header.clone());
        }
        self
    }

    /// Override header styles. Extra styles are ignored.
    pub fn set_header_styles(&mut self, styles: impl IntoIterator<Item = Style>) -> &mut Self {
        for (header, style) in self.headers.iter_mut().zip(styles) {
            header.style = Some(style);
        }
        self
    }

    /// Set the default style of each column. Extra styles are ignored.
    pub fn set_column_styles(&mut self, styles: impl IntoIterator<Item = Style>) -> &mut Self {
        for (col, style) in self.columns.iter_mut().zip(styles) {
            col.style = style;
        }
        self
    }

    /// Set the justification of each column. Extra values are ignored.
    pub fn set_justification(
        &mut self,
        values: impl IntoIterator<Item = Justification>,
    ) -> &mut Self {
        for (col, justification) in self.columns.iter_mut().zip(values) {
            col.justification = justification;
        }
        self
    }

    /// Append a row of plain values
    pub fn add_row<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_styled_row(values.into_iter().map(Cell::new))
    }

    /// Append a row of pre-styled cells
    pub fn add_styled_row(&mut self, cells: impl IntoIterator<Item = Cell>) -> &mut Self {
        let row = Row::fit(cells, self.columns.len());
        self.rows.push(row);
        self
    }

    /// Lay out and render the whole table
    pub fn render(&mut self) -> String {
        self.strategy = Some(layout::compute_col_widths(
            &mut self.columns,
            &self.headers,
            &self.rows,
            self.pad,
            self.max_width,
        ));

        let mut out = String::new();
        if !self.title.value.is_empty() {
            let style = self.title.style.clone().unwrap_or_default();
            out.push_str(&justify(
                &self.title.value,
                self.width(),
                0,
                &style,
                Justification::Center,
            ));
            out.push_str("\n\n");
        }
        out.push_str(&render_lines(&self.headers, &self.columns, self.pad, 0));
        for row in &self.rows {
            out.push_str(&render_lines(&row.cells, &self.columns, self.pad, 1));
        }
        out
    }

    /// Render and write the table to `writer`
    pub fn write_to(&mut self, writer: &mut impl Write) -> io::Result<()> {
        let rendered = self.render();
        writer.write_all(rendered.as_bytes())?;
        writer.flush()
    }

    /// Render the table to stdout
    pub fn show(&mut self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }

    /// Full rendered width: computed column widths plus padding
    pub fn width(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.computed_width + 2 * self.pad)
            .sum()
    }

    /// Columns, with layout from the last render
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header cells
    pub fn headers(&self) -> &[Cell] {
        &self.headers
    }

    /// Data rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Title text
    pub fn title(&self) -> &str {
        &self.title.value
    }

    /// Spaces on each side of cell content
    pub fn padding(&self) -> usize {
        self.pad
    }

    /// Width budget for layout
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Height limit
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Strategy chosen by the last render
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }
}

/// Render one logical row as one or more terminal lines.
///
/// Every cell is wrapped at its column's computed width; cells with fewer
/// lines than the tallest one are filled with blank fragments.
fn render_lines(cells: &[Cell], columns: &[Column], pad: usize, min_lines: usize) -> String {
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .zip(columns)
        .map(|(cell, col)| wrap(&cell.value, col.computed_width))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(0).max(min_lines);

    let mut out = String::new();
    for line in 0..height {
        for ((cell, col), lines) in cells.iter().zip(columns).zip(&wrapped) {
            let style = cell.style.as_ref().unwrap_or(&col.style);
            let fragment = lines.get(line).map_or("", String::as_str);
            out.push_str(&justify(
                fragment,
                col.computed_width,
                pad,
                style,
                col.justification,
            ));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Strategy;
    use crate::style::{Color, visible_width};
    use proptest::prelude::*;

    fn sized(columns: usize, width: usize, options: &[TableOption]) -> Table {
        Table::with_size(
            columns,
            TerminalSize::new(width, 25),
            options.iter().copied(),
        )
    }

    fn plain(table: &mut Table) -> &mut Table {
        let n = table.columns().len();
        table.set_column_styles(std::iter::repeat_n(Style::plain(), n))
    }

    #[test]
    fn test_create_table() {
        let table = Table::new(3);
        assert_eq!(table.columns().len(), 3);
        assert!(
            table
                .columns()
                .iter()
                .all(|c| c.justification() == Justification::Left)
        );
        assert!(table.max_width() > 0 && table.max_height() > 0);
        assert_eq!(table.padding(), DEFAULT_PADDING);
    }

    #[test]
    fn test_max_width_only_lowers() {
        let table = sized(2, 100, &[TableOption::MaxWidth(60)]);
        assert_eq!(table.max_width(), 60);

        let table = sized(2, 100, &[TableOption::MaxWidth(200)]);
        assert_eq!(table.max_width(), 100);
    }

    #[test]
    fn test_options_apply() {
        let table = sized(2, 80, &[TableOption::Padding(3), TableOption::MaxHeight(10)]);
        assert_eq!(table.padding(), 3);
        assert_eq!(table.max_height(), 10);
    }

    #[test]
    fn test_basic_add_row() {
        let mut table = Table::new(2);
        table.add_row(["test1", "test2"]);
        assert_eq!(table.rows().len(), 1);
        let values: Vec<_> = table.rows()[0].cells().iter().map(Cell::value).collect();
        assert_eq!(values, ["test1", "test2"]);
    }

    #[test]
    fn test_short_row_is_padded() {
        let mut table = Table::new(3);
        table.add_row(["test1", "test2"]);
        let cells = table.rows()[0].cells();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].value(), "");
        assert_eq!(cells[2].width(), 0);
    }

    #[test]
    fn test_long_row_is_truncated() {
        let mut table = Table::new(2);
        table.add_styled_row([Cell::new("a"), Cell::new("b"), Cell::new("c")]);
        assert_eq!(table.rows()[0].cells().len(), 2);
    }

    #[test]
    fn test_cell_length() {
        let mut table = Table::new(2);
        table.add_row(["---7---", "---8----"]);
        let widths: Vec<_> = table.rows()[0].cells().iter().map(Cell::width).collect();
        assert_eq!(widths, [7, 8]);
    }

    #[test]
    fn test_title_defaults_to_bold() {
        let mut table = Table::new(1);
        table.set_title("This is the title");
        assert_eq!(table.title(), "This is the title");
        assert_eq!(table.title.style(), Some(&Style::from(crate::style::Decoration::Bold)));
    }

    #[test]
    fn test_excess_headers_and_styles_ignored() {
        let mut table = Table::new(2);
        table
            .set_headers(["a", "b", "c"])
            .set_column_styles([Style::plain(), Style::plain(), Style::plain()])
            .set_justification([
                Justification::Right,
                Justification::Center,
                Justification::Right,
            ]);
        assert_eq!(table.headers().len(), 2);
        assert_eq!(table.columns()[1].justification(), Justification::Center);
    }

    #[test]
    fn test_simple_table_scenario() {
        let mut table = sized(2, 80, &[]);
        table
            .set_headers(["Status", "Reason"])
            .add_row(["OK", "Everything worked"]);
        table.render();

        assert_eq!(table.strategy(), Some(Strategy::Simple));
        for col in table.columns() {
            assert_eq!(col.computed_width(), col.natural_width());
            assert!(!col.wraps());
        }
        assert_eq!(table.columns()[0].natural_width(), 6);
        assert_eq!(table.columns()[1].natural_width(), 17);
    }

    #[test]
    fn test_forced_wrap_scenario() {
        let mut table = sized(3, 80, &[TableOption::MaxWidth(60), TableOption::Padding(0)]);
        table.add_row(["a".repeat(10), "b".repeat(20), "c".repeat(40)]);
        table.render();

        assert_eq!(table.strategy(), Some(Strategy::WrapWidest));
        let widths: Vec<_> = table.columns().iter().map(Column::computed_width).collect();
        assert_eq!(widths, [10, 20, 30]);
        assert!(table.columns()[2].wraps());
    }

    #[test]
    fn test_render_exact_output() {
        let mut table = sized(2, 80, &[]);
        plain(&mut table).add_row(["a", "bb"]).add_row(["ccc", ""]);
        assert_eq!(table.render(), " a    bb \n ccc     \n");
    }

    #[test]
    fn test_render_wraps_widest_column() {
        let mut table = sized(2, 20, &[TableOption::Padding(0)]);
        plain(&mut table).add_row(["id", "alpha beta gamma delta"]);
        let expected = format!(
            "id{:<18}\n{:<2}{:<18}\n",
            "alpha beta gamma", "", "delta"
        );
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_render_title_centered() {
        let mut table = sized(1, 80, &[TableOption::Padding(0)]);
        plain(&mut table)
            .set_title_styled("T", Style::plain())
            .add_row(["12345"]);
        assert_eq!(table.render(), "  T  \n\n12345\n");
    }

    #[test]
    fn test_empty_row_renders_blank_line() {
        let mut table = sized(2, 80, &[]);
        plain(&mut table).add_row(["x", "y"]).add_row(Vec::<String>::new());
        assert_eq!(table.render(), " x  y \n      \n");
    }

    #[test]
    fn test_cell_style_overrides_column_style() {
        let green = Style::from(Color::Green);
        let red = Style::from(Color::Red);
        let mut table = sized(1, 80, &[TableOption::Padding(0)]);
        table
            .set_column_styles([green.clone()])
            .add_row(["OK"])
            .add_styled_row([Cell::styled("NO", red.clone())]);
        let rendered = table.render();
        assert!(rendered.contains(&green.apply_to("OK")));
        assert!(rendered.contains(&red.apply_to("NO")));
    }

    #[test]
    fn test_headers_rendered_with_header_style() {
        let mut table = sized(1, 80, &[TableOption::Padding(0)]);
        table.set_headers(["Name"]).add_row(["ripgrep"]);
        let rendered = table.render();
        let first = rendered.lines().next().unwrap();
        assert_eq!(first, "\x1b[1;4mName\x1b[22;24m   ");
    }

    #[test]
    fn test_overflow_exceeds_max_width() {
        let mut table = sized(2, 40, &[TableOption::Padding(0)]);
        plain(&mut table).add_row(["a".repeat(30), "b".repeat(35)]);
        let rendered = table.render();
        assert_eq!(table.strategy(), Some(Strategy::Overflow));
        assert_eq!(visible_width(rendered.lines().next().unwrap()), 65);
    }

    #[test]
    fn test_write_to() {
        let mut table = sized(1, 80, &[]);
        plain(&mut table).add_row(["x"]);
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), " x \n");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn rows_always_match_column_count(
            columns in 1usize..6,
            rows in proptest::collection::vec(
                proptest::collection::vec("[a-z ]{0,12}", 0..9),
                0..8,
            ),
        ) {
            let mut table = Table::new(columns);
            for row in rows {
                table.add_row(row);
            }
            for row in table.rows() {
                prop_assert_eq!(row.cells().len(), columns);
            }
        }

        #[test]
        fn fitting_tables_render_at_natural_width(
            rows in proptest::collection::vec(
                proptest::collection::vec("[a-z]{0,10}", 3),
                1..6,
            ),
            pad in 0usize..3,
        ) {
            let mut table = sized(3, 200, &[TableOption::Padding(pad)]);
            for row in rows {
                table.add_row(row);
            }
            let rendered = table.render();
            prop_assert_eq!(table.strategy(), Some(Strategy::Simple));
            let width = table.width();
            for line in rendered.lines() {
                prop_assert_eq!(visible_width(line), width);
            }
        }
    }
}
