//! Greedy word wrapping
//!
//! Break opportunities come from Unicode line breaking rules (UAX #14).
//! Lines are filled greedily; a single word wider than the line is split
//! between characters.

use unicode_linebreak::{linebreaks, BreakOpportunity};

/// Wrap `text` so that every line measures at most `max_width`.
///
/// `measure` returns the width of a string in the same units as `max_width`.
/// Trailing whitespace is not measured and is trimmed from the output.
/// Always returns at least one line.
pub fn wrap_text(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    if text.is_empty() {
        lines.push(String::new());
        return lines;
    }

    let mut line = String::new();
    let mut start = 0;

    for (end, opportunity) in linebreaks(text) {
        let segment = &text[start..end];
        start = end;

        let mut candidate = line.clone();
        candidate.push_str(segment);

        if line.is_empty() || measure(candidate.trim_end()) <= max_width {
            line = candidate;
        } else {
            lines.push(line.trim_end().to_string());
            line = segment.to_string();
        }

        if measure(line.trim_end()) > max_width {
            line = split_long(&line, max_width, &measure, &mut lines);
        }

        if opportunity == BreakOpportunity::Mandatory {
            lines.push(line.trim_end().to_string());
            line.clear();
        }
    }

    if !line.trim_end().is_empty() || lines.is_empty() {
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// Emit full-width pieces of an over-long segment, returning the remainder
fn split_long(
    segment: &str,
    max_width: f64,
    measure: &impl Fn(&str) -> f64,
    lines: &mut Vec<String>,
) -> String {
    let mut piece = String::new();
    for ch in segment.trim_end().chars() {
        piece.push(ch);
        if measure(&piece) > max_width && piece.chars().count() > 1 {
            piece.pop();
            lines.push(std::mem::take(&mut piece));
            piece.push(ch);
        }
    }
    // Keep the trailing space so the next segment joins with a separator
    let trailing = &segment[segment.trim_end().len()..];
    piece.push_str(trailing);
    piece
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One unit per character
    fn chars(s: &str) -> f64 {
        s.chars().count() as f64
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(wrap_text("", 10.0, chars), vec![""]);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(wrap_text("Hello world", 20.0, chars), vec!["Hello world"]);
    }

    #[test]
    fn test_wraps_at_spaces() {
        assert_eq!(
            wrap_text("the quick brown fox", 10.0, chars),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_trailing_space_not_measured() {
        // "abcd " is 5 wide but fits in 4 once trimmed
        assert_eq!(wrap_text("abcd efgh", 4.0, chars), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_mandatory_break() {
        assert_eq!(wrap_text("Hello\nworld", 50.0, chars), vec!["Hello", "world"]);
    }

    #[test]
    fn test_long_word_split() {
        assert_eq!(
            wrap_text("abcdefghij xy", 4.0, chars),
            vec!["abcd", "efgh", "ij", "xy"]
        );
    }

    #[test]
    fn test_lines_fit() {
        let text = "Explain the difference between a binary search tree and an AVL tree, \
                    giving one example of a rotation.";
        for line in wrap_text(text, 25.0, chars) {
            assert!(chars(&line) <= 25.0, "{:?} too wide", line);
        }
    }
}
