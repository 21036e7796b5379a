//! Small string helpers shared by the canvas and table layout.
//!
//! Widths are measured in terminal cells with `unicode-width`, so padding
//! lines up for wide (e.g. CJK) characters as well as for ASCII.

use unicode_width::UnicodeWidthStr;

/// The no-break space, which collapses like ordinary whitespace.
pub const NO_BREAK_SPACE: char = '\u{a0}';

/// Return true if `c` takes part in whitespace collapsing.
pub fn is_collapsible_whitespace(c: char) -> bool {
    c.is_whitespace() || c == NO_BREAK_SPACE
}

/// Return true if `s` is empty or consists only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_collapsible_whitespace)
}

/// The display width of `s` in character cells.
pub fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Append `count` spaces to `out`.
pub fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// A string of `count` spaces.
pub fn spaces(count: usize) -> String {
    " ".repeat(count)
}

/// Pad `s` on the right up to `target` cells.  Text already at least that
/// wide is returned unchanged.
pub fn pad_right(s: &str, target: usize) -> String {
    let mut result = String::from(s);
    push_spaces(&mut result, target.saturating_sub(width(s)));
    result
}

/// Pad `s` on the left up to `target` cells.
pub fn pad_left(s: &str, target: usize) -> String {
    let missing = target.saturating_sub(width(s));
    let mut result = String::with_capacity(s.len() + missing);
    push_spaces(&mut result, missing);
    result.push_str(s);
    result
}

/// Centre `s` within `target` cells; an odd remainder goes to the right.
pub fn pad_center(s: &str, target: usize) -> String {
    let missing = target.saturating_sub(width(s));
    let left = missing / 2;
    let mut result = String::with_capacity(s.len() + missing);
    push_spaces(&mut result, left);
    result.push_str(s);
    push_spaces(&mut result, missing - left);
    result
}

/// Split `s` on `sep`, producing at most `limit + 1` pieces; the last piece
/// holds the unsplit remainder.
pub fn split_bounded(s: &str, sep: char, limit: usize) -> Vec<&str> {
    s.splitn(limit + 1, sep).collect()
}

/// Split `s` into its physical lines.  Unlike `str::lines` every separator
/// counts, so `"a\n"` yields `["a", ""]`, and `""` yields `[""]`.
pub fn split_lines(s: &str) -> impl Iterator<Item = &str> {
    s.split('\n')
}
