use anyhow::{Context, Result};
use clt::{Color, Decoration, Output, Style, styled};

const COLORS: [(Color, &str); 9] = [
    (Color::Black, "black"),
    (Color::Red, "red"),
    (Color::Green, "green"),
    (Color::Yellow, "yellow"),
    (Color::Blue, "blue"),
    (Color::Magenta, "magenta"),
    (Color::Cyan, "cyan"),
    (Color::White, "white"),
    (Color::Default, "default"),
];

const DECORATIONS: [(Decoration, &str); 3] = [
    (Decoration::Bold, "bold"),
    (Decoration::Italic, "italic"),
    (Decoration::Underline, "underline"),
];

pub fn styles() -> Result<()> {
    let mut out = Output::new();
    out.addln(styled("Colors", [Decoration::Bold]));
    for (color, name) in COLORS {
        out.addln(format!(
            "  {}{}",
            Style::from(color).apply_to(&format!("{name:<10}")),
            Style::compose([color.background()]).apply_to(" background ")
        ));
    }
    out.newline().addln(styled("Decorations", [Decoration::Bold]));
    for (decoration, name) in DECORATIONS {
        out.addln(format!("  {}", Style::from(decoration).apply_to(name)));
    }
    out.newline()
        .addln(styled("Combined", [Decoration::Bold]))
        .addln(format!(
            "  {}",
            Style::compose([Color::Red.token(), Decoration::Bold.token()]).apply_to("bold red")
        ));
    out.render().context("Failed to write styles")
}
