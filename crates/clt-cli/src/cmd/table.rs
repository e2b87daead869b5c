use anyhow::{Context, Result};
use clt::{Cell, Color, Config, Output, Style, Table, TableOption};

/// Width the wrapped example is squeezed to
const WRAP_DEMO_WIDTH: usize = 50;

pub fn table(
    config: &Config,
    max_width: Option<usize>,
    padding: Option<usize>,
    wrap: bool,
) -> Result<()> {
    let mut options = config.table.options();
    options.extend(max_width.map(TableOption::MaxWidth));
    options.extend(padding.map(TableOption::Padding));

    let mut tables = vec![
        ("Simple Table Example", simple(&options)),
        ("Styled Table Example", styled(&options)),
    ];
    if wrap {
        let mut squeezed = options.clone();
        squeezed.push(TableOption::MaxWidth(WRAP_DEMO_WIDTH));
        tables.push(("Wrapped Table Example", wrapped(&squeezed)));
    }

    let mut out = Output::new();
    let rule = "=".repeat(15);
    for (heading, mut table) in tables {
        table.set_justification(config.table.justification.iter().copied());
        out.newline()
            .addln(format!("{rule} {heading} {rule}"))
            .newline()
            .add(table.render());
        tracing::debug!(heading, strategy = ?table.strategy(), width = table.width(), "rendered");
    }
    out.newline();
    out.render().context("Failed to write tables")
}

fn simple(options: &[TableOption]) -> Table {
    let mut t = Table::with_options(3, options.iter().copied());
    t.set_title("Simple Example Table")
        .set_headers(["Column1", "Column2", "Column3"])
        .add_row(["Col1 Line1", "Col2 Line1", "Col3 Line1"])
        .add_row(["Col1 Line2", "Col2 Line2", "Col3 Line2"]);
    t
}

fn wrapped(options: &[TableOption]) -> Table {
    let mut t = Table::with_options(3, options.iter().copied());
    t.set_title("Wrapped Example Table")
        .set_headers(["Column1", "Column2", "Column3"])
        .add_row([
            "Col1 Line1",
            "Col2 Line1",
            "This is a pretty long description.",
        ])
        .add_row(["Col1 Line2", "Col2 Line2", "This is another longish one."]);
    t
}

fn styled(options: &[TableOption]) -> Table {
    let mut t = Table::with_options(2, options.iter().copied());
    t.set_title("Styled Example Table")
        .set_headers(["Status", "Reason"])
        .set_column_styles([Style::from(Color::Green), Style::from(Color::Default)])
        .add_row(["OK", "Everything worked"])
        .add_styled_row([
            Cell::styled("FAIL", Style::from(Color::Red)),
            Cell::styled("Something bad happened", Style::from(Color::Default)),
        ]);
    t
}
