//! Style Engine - ANSI SGR composition
//!
//! A [`Style`] is a pair of escape sequences wrapped around content. Styles
//! are built from one or more [`Token`]s (a color or a text decoration), and
//! all tokens of a style share a single `ESC[...m` sequence:
//!
//! ```
//! use clt::style::{Color, Decoration, Style};
//!
//! let style = Style::compose([Color::Red.token(), Decoration::Underline.token()]);
//! assert_eq!(style.apply_to("oops"), "\x1b[31;4moops\x1b[39;24m");
//! ```

use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// A single SGR code pair: the code that turns an attribute on and the code
/// that turns it back off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    on: u8,
    off: u8,
}

impl Token {
    /// Build a token from raw SGR codes.
    pub const fn new(on: u8, off: u8) -> Self {
        Self { on, off }
    }

    /// The SGR codes as `(on, off)`.
    pub const fn codes(self) -> (u8, u8) {
        (self.on, self.off)
    }
}

/// Standard foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// 30
    Black,
    /// 31
    Red,
    /// 32
    Green,
    /// 33
    Yellow,
    /// 34
    Blue,
    /// 35
    Magenta,
    /// 36
    Cyan,
    /// 37
    White,
    /// 39, the terminal's default foreground
    Default,
}

impl Color {
    /// Foreground token for this color.
    pub const fn token(self) -> Token {
        let on = match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Default => 39,
        };
        Token::new(on, 39)
    }

    /// Background token for this color (both codes shifted into the 40s).
    pub const fn background(self) -> Token {
        let (on, off) = self.token().codes();
        Token::new(on + 10, off + 10)
    }
}

/// Text decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    /// 1 / 22
    Bold,
    /// 3 / 23
    Italic,
    /// 4 / 24
    Underline,
}

impl Decoration {
    /// Token for this decoration.
    pub const fn token(self) -> Token {
        match self {
            Self::Bold => Token::new(1, 22),
            Self::Italic => Token::new(3, 23),
            Self::Underline => Token::new(4, 24),
        }
    }
}

impl From<Color> for Token {
    fn from(color: Color) -> Self {
        color.token()
    }
}

impl From<Decoration> for Token {
    fn from(decoration: Decoration) -> Self {
        decoration.token()
    }
}

/// A computed style: the escape sequences written before and after content.
///
/// Immutable once built; clone it freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    prefix: String,
    suffix: String,
}

impl Style {
    /// Compose a style from tokens, preserving their order.
    ///
    /// Zero tokens gives a no-op style.
    pub fn compose<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let tokens: Vec<Token> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Self::plain();
        }
        Self {
            prefix: sgr(tokens.iter().map(|t| t.on)),
            suffix: sgr(tokens.iter().map(|t| t.off)),
        }
    }

    /// A style that leaves content untouched.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Wrap `content` in this style's escape sequences.
    pub fn apply_to(&self, content: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + content.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(content);
        out.push_str(&self.suffix);
        out
    }

    /// The sequence written before content.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The sequence written after content.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// True when this style emits no escape sequences at all.
    pub fn is_plain(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self::compose([color])
    }
}

impl From<Decoration> for Style {
    fn from(decoration: Decoration) -> Self {
        Self::compose([decoration])
    }
}

impl From<Token> for Style {
    fn from(token: Token) -> Self {
        Self::compose([token])
    }
}

fn sgr(codes: impl Iterator<Item = u8>) -> String {
    let mut out = String::from("\x1b[");
    for (i, code) in codes.enumerate() {
        if i > 0 {
            out.push(';');
        }
        let _ = write!(out, "{code}");
    }
    out.push('m');
    out
}

/// Shorthand for `Style::compose(tokens).apply_to(content)`.
pub fn styled<I, T>(content: &str, tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<Token>,
{
    Style::compose(tokens).apply_to(content)
}

/// Remove CSI escape sequences (`ESC [ ... final-byte`) from `s`.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameter and intermediate bytes run until a final byte in 0x40..=0x7E.
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Width in terminal columns of `s` once escape sequences are removed.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}
