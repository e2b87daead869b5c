//! Cell justification.

use crate::style::Style;
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

/// Placement of text inside a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    /// Flush left (default)
    #[default]
    Left,
    /// Centered, extra space on the right
    Center,
    /// Flush right
    Right,
}

/// Place `text` in a field `width` columns wide with `pad` spaces on each
/// side, styling only the text itself.
///
/// The result is `width + 2 * pad` columns wide whenever the text fits. Wider
/// text overflows the field and keeps just the padding around it.
pub fn justify(
    text: &str,
    width: usize,
    pad: usize,
    style: &Style,
    justification: Justification,
) -> String {
    let gap = width.saturating_sub(text.width());
    let (left, right) = match justification {
        Justification::Left => (0, gap),
        Justification::Right => (gap, 0),
        Justification::Center => (gap / 2, gap - gap / 2),
    };
    format!(
        "{}{}{}",
        spaces(left + pad),
        style.apply_to(text),
        spaces(right + pad)
    )
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, visible_width};
    use proptest::prelude::*;

    #[test]
    fn test_left() {
        let out = justify("ab", 5, 1, &Style::plain(), Justification::Left);
        assert_eq!(out, " ab    ");
    }

    #[test]
    fn test_right() {
        let out = justify("ab", 5, 1, &Style::plain(), Justification::Right);
        assert_eq!(out, "    ab ");
    }

    #[test]
    fn test_center_extra_space_goes_right() {
        let out = justify("ab", 5, 0, &Style::plain(), Justification::Center);
        assert_eq!(out, " ab  ");
    }

    #[test]
    fn test_style_wraps_text_only() {
        let red = Style::from(Color::Red);
        let out = justify("ab", 4, 1, &red, Justification::Right);
        assert_eq!(out, "   \x1b[31mab\x1b[39m ");
    }

    #[test]
    fn test_overflow_keeps_padding_only() {
        for j in [Justification::Left, Justification::Center, Justification::Right] {
            let out = justify("abcdef", 3, 1, &Style::plain(), j);
            assert_eq!(out, " abcdef ");
        }
    }

    fn any_justification() -> impl Strategy<Value = Justification> {
        prop_oneof![
            Just(Justification::Left),
            Just(Justification::Center),
            Just(Justification::Right),
        ]
    }

    proptest! {
        #[test]
        fn justified_width_is_field_plus_padding(
            text in "[a-zA-Z ]{0,30}",
            extra in 0usize..20,
            pad in 0usize..4,
            j in any_justification(),
        ) {
            let width = text.len() + extra;
            let style = Style::compose([Color::Cyan]);
            let out = justify(&text, width, pad, &style, j);
            prop_assert_eq!(visible_width(&out), width + 2 * pad);
        }
    }
}
