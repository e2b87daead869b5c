//! Greedy word wrap with a character-wrap fallback.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Characters a line may be broken after.
pub const BREAKPOINTS: &[char] = &[' ', ':', '.', '-', '/', '\\'];

/// Break `text` into lines no wider than `width` columns.
///
/// Each step takes the longest prefix that fits, then backs up to the last
/// breakpoint inside it (keeping the breakpoint on the current line). If the
/// prefix has no breakpoint the line is hard-broken at `width`. Lines are
/// trimmed; only whitespace is ever lost.
///
/// Empty or all-whitespace input yields no lines.
///
/// ```
/// use clt::table::wrap;
///
/// assert_eq!(wrap("This is a pretty long description.", 12), [
///     "This is a",
///     "pretty long",
///     "description.",
/// ]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rem = text.trim_start();

    while !rem.is_empty() {
        if rem.width() <= width {
            lines.push(rem.trim().to_string());
            break;
        }

        let cut = fit(rem, width);
        let split = rem[..cut]
            .char_indices()
            .rfind(|(_, c)| BREAKPOINTS.contains(c))
            .map_or(cut, |(i, c)| i + c.len_utf8());

        lines.push(rem[..split].trim().to_string());
        rem = rem[split..].trim_start();
    }

    lines
}

/// Byte offset of the longest prefix of `s` at most `width` columns wide.
/// Always covers at least one character so wrapping makes progress.
fn fit(s: &str, width: usize) -> usize {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            return if i == 0 { c.len_utf8() } else { i };
        }
        used += w;
    }
    s.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fits_on_one_line() {
        assert_eq!(wrap("short", 10), ["short"]);
        assert_eq!(wrap("  padded  ", 10), ["padded"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("    ", 2).is_empty());
    }

    #[test]
    fn test_breaks_on_last_space() {
        assert_eq!(wrap("aaa bbb ccc", 8), ["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_breakpoint_stays_on_line() {
        assert_eq!(wrap("path/to/some/file", 9), ["path/to/", "some/file"]);
        assert_eq!(wrap("key:value-pair", 10), ["key:value-", "pair"]);
        assert_eq!(wrap(r"C:\dir\file", 7), [r"C:\dir\", "file"]);
    }

    #[test]
    fn test_hard_break_without_breakpoints() {
        assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_zero_width_still_progresses() {
        assert_eq!(wrap("abc", 0), ["a", "b", "c"]);
    }

    #[test]
    fn test_wide_characters() {
        // each CJK glyph is two columns wide
        assert_eq!(wrap("日本語テキスト", 6), ["日本語", "テキス", "ト"]);
    }

    fn squash(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn wrap_never_drops_characters(
            text in "[a-zA-Z0-9 :./\\\\-]{0,120}",
            width in 1usize..40,
        ) {
            let lines = wrap(&text, width);
            prop_assert_eq!(squash(&lines.concat()), squash(&text));
        }

        #[test]
        fn wrapped_lines_fit(
            text in "[a-zA-Z0-9 :./\\\\-]{0,120}",
            width in 1usize..40,
        ) {
            for line in wrap(&text, width) {
                prop_assert!(line.width() <= width, "{line:?} wider than {width}");
                prop_assert!(!line.is_empty());
            }
        }

        #[test]
        fn rejoining_with_spaces_restores_words(
            words in proptest::collection::vec("[a-z]{1,8}", 1..12),
            width in 8usize..30,
        ) {
            let text = words.join(" ");
            prop_assert_eq!(wrap(&text, width).join(" "), text);
        }
    }
}
