//! Utility functions for measuring, splitting, truncating and padding cell text.
//!
//! Widths are counted in `char`s. No attempt is made to account for wide or
//! zero-width characters: one `char` occupies one column.

/// Returns the width of a string in columns.
///
/// # Example
///
/// ```rust
/// use spantable::util::text_width;
///
/// assert_eq!(text_width("hello"), 5);
/// assert_eq!(text_width("héllo"), 5);
/// ```
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Splits a string after `width` columns.
///
/// Returns the head (at most `width` columns) and the remaining tail. The two
/// parts concatenate back to the original string.
///
/// # Example
///
/// ```rust
/// use spantable::util::split_at_width;
///
/// assert_eq!(split_at_width("Hello World", 5), ("Hello", " World"));
/// assert_eq!(split_at_width("Hi", 5), ("Hi", ""));
/// ```
pub fn split_at_width(s: &str, width: usize) -> (&str, &str) {
    match s.char_indices().nth(width) {
        Some((offset, _)) => s.split_at(offset),
        None => (s, ""),
    }
}

/// Truncates a string from the end to fit within `max_width`, appending a marker.
///
/// If the string already fits it is returned unchanged. Otherwise characters
/// are removed from the end and the marker is appended. When the column is
/// narrower than the marker, the marker itself is clipped to fit.
///
/// # Example
///
/// ```rust
/// use spantable::util::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "..."), "Hello...");
/// assert_eq!(truncate_end("Short", 10, "..."), "Short");
/// assert_eq!(truncate_end("Hello World", 2, "..."), "..");
/// ```
pub fn truncate_end(s: &str, max_width: usize, marker: &str) -> String {
    if text_width(s) <= max_width {
        return s.to_string();
    }
    clip_with_marker(s, max_width, marker)
}

/// Unconditionally replaces the tail of `s` with `marker`, keeping the result
/// within `max_width` columns.
///
/// Unlike [`truncate_end`] this always emits the marker, even if `s` would
/// fit on its own. The prefix kept before the marker is
/// `max_width - marker_width` columns, clamped at zero.
pub fn clip_with_marker(s: &str, max_width: usize, marker: &str) -> String {
    let marker_width = text_width(marker);
    if max_width <= marker_width {
        // Not enough room for any content - clip the marker itself
        return split_at_width(marker, max_width).0.to_string();
    }

    let (head, _) = split_at_width(s, max_width - marker_width);
    let mut result = String::with_capacity(head.len() + marker.len());
    result.push_str(head);
    result.push_str(marker);
    result
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// Strings already at or beyond `width` are returned unchanged.
///
/// # Example
///
/// ```rust
/// use spantable::util::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");  // No truncation
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let current = text_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut result = String::with_capacity(s.len() + (width - current));
    result.push_str(s);
    result.extend(std::iter::repeat_n(' ', width - current));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_width_counts_chars_not_bytes() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("日本"), 2);
        assert_eq!(text_width("naïve"), 5);
    }

    #[test]
    fn split_at_width_respects_char_boundaries() {
        assert_eq!(split_at_width("日本語です", 2), ("日本", "語です"));
        assert_eq!(split_at_width("abc", 0), ("", "abc"));
        assert_eq!(split_at_width("abc", 3), ("abc", ""));
        assert_eq!(split_at_width("", 4), ("", ""));
    }

    #[test]
    fn truncate_end_keeps_fitting_text() {
        assert_eq!(truncate_end("exact", 5, "..."), "exact");
    }

    #[test]
    fn truncate_end_marker_is_suffix() {
        let out = truncate_end("abcdefghij", 7, "...");
        assert_eq!(out, "abcd...");
        assert_eq!(text_width(&out), 7);
    }

    #[test]
    fn clip_with_marker_exactly_marker_width() {
        assert_eq!(clip_with_marker("abcdef", 3, "..."), "...");
    }

    #[test]
    fn clip_with_marker_narrower_than_marker() {
        assert_eq!(clip_with_marker("abcdef", 2, "..."), "..");
        assert_eq!(clip_with_marker("abcdef", 1, "..."), ".");
        assert_eq!(clip_with_marker("abcdef", 0, "..."), "");
    }

    #[test]
    fn clip_with_marker_always_marks() {
        assert_eq!(clip_with_marker("ab", 10, "..."), "ab...");
    }

    #[test]
    fn pad_right_fills_with_spaces() {
        assert_eq!(pad_right("", 3), "   ");
        assert_eq!(pad_right("日本", 4), "日本  ");
    }
}
