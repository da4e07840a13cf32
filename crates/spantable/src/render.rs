//! Row rendering with truncation and bounded wrapping.
//!
//! A logical row is written as one or more physical lines. Each cell either
//! fits its column, is trimmed with a [`TRUNCATION_MARKER`], or is split with
//! the unrendered tail carried over to the next physical line. The
//! [`LineBudget`] caps how many physical lines a logical row may take; the
//! last allowed line always trims.
//!
//! ```rust
//! use spantable::{LineBudget, ResolvedWidths, RowRenderer, BorderStyle};
//!
//! let widths = ResolvedWidths { widths: vec![5, 4] };
//! let renderer = RowRenderer::new(&widths, BorderStyle::Ascii);
//!
//! let mut out = String::new();
//! let lines = renderer
//!     .render_wrapped(&["Hello World", "ok"], LineBudget::new(2).unwrap(), &mut out)
//!     .unwrap();
//!
//! assert_eq!(lines, 2);
//! assert_eq!(out, "|Hello|ok  |\n| W...|    |\n");
//! ```

use std::num::NonZeroUsize;

use crate::decorator::BorderStyle;
use crate::error::{Result, TableError};
use crate::resolve::ResolvedWidths;
use crate::sink::Sink;
use crate::util::{clip_with_marker, pad_right, split_at_width, text_width};

/// Marker appended to trimmed cells.
pub const TRUNCATION_MARKER: &str = "...";

/// Per-column continuation left over after rendering one physical line.
///
/// `None` means nothing is pending for that column.
pub type Pending = Vec<Option<String>>;

/// Maximum number of physical lines a logical row may occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineBudget(NonZeroUsize);

impl LineBudget {
    /// A budget of one line: overflow is always trimmed.
    pub const SINGLE: LineBudget = LineBudget(NonZeroUsize::MIN);

    /// Create a budget, rejecting zero.
    pub fn new(lines: usize) -> Result<Self> {
        NonZeroUsize::new(lines)
            .map(LineBudget)
            .ok_or(TableError::InvalidLineBudget(lines))
    }

    /// The number of lines allowed.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for LineBudget {
    fn default() -> Self {
        LineBudget::SINGLE
    }
}

/// Result of formatting a single cell for one physical line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellOutput {
    /// Text to emit, padded to exactly the column width.
    pub text: String,
    /// Unrendered tail to carry to the next line, if any.
    pub pending: Option<String>,
    /// Whether the truncation marker was applied.
    pub truncated: bool,
}

/// Format one cell into a column of `width` characters.
///
/// - Fitting text is padded with spaces and leaves nothing pending.
/// - With `force_trim`, overflowing text keeps `width - 3` characters
///   (clamped at zero) followed by the marker, clipped to `width`.
/// - Otherwise the first `width` characters are emitted and the rest is
///   returned as pending.
pub fn format_cell(cell: &str, width: usize, force_trim: bool) -> CellOutput {
    if text_width(cell) <= width {
        return CellOutput {
            text: pad_right(cell, width),
            pending: None,
            truncated: false,
        };
    }

    if force_trim {
        let trimmed = clip_with_marker(cell, width, TRUNCATION_MARKER);
        return CellOutput {
            text: pad_right(&trimmed, width),
            pending: None,
            truncated: true,
        };
    }

    let (head, tail) = split_at_width(cell, width);
    CellOutput {
        text: head.to_string(),
        pending: Some(tail.to_string()),
        truncated: false,
    }
}

/// Returns `true` if any column still has content to render.
pub fn has_pending(pending: &[Option<String>]) -> bool {
    pending.iter().any(Option::is_some)
}

/// Writes rows over a fixed set of resolved column widths.
#[derive(Clone, Copy, Debug)]
pub struct RowRenderer<'a> {
    widths: &'a ResolvedWidths,
    vertical: char,
}

impl<'a> RowRenderer<'a> {
    /// Create a renderer for the given widths and border style.
    pub fn new(widths: &'a ResolvedWidths, border: BorderStyle) -> Self {
        RowRenderer {
            widths,
            vertical: border.vertical(),
        }
    }

    /// Number of columns rendered per line.
    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }

    /// Write one physical line and return what is left for the next one.
    ///
    /// Missing cells render as empty; cells beyond the column count are
    /// ignored. The returned vector has one entry per column.
    pub fn render_row<S, K>(&self, row: &[S], force_trim: bool, sink: &mut K) -> Result<Pending>
    where
        S: AsRef<str>,
        K: Sink + ?Sized,
    {
        let mut glyph = [0u8; 4];
        let vertical: &str = self.vertical.encode_utf8(&mut glyph);
        let mut pending = Vec::with_capacity(self.widths.len());

        sink.write(vertical)?;
        for (j, width) in self.widths.iter().enumerate() {
            let cell = row.get(j).map(|c| c.as_ref()).unwrap_or("");
            let output = format_cell(cell, width, force_trim);
            sink.write(&output.text)?;
            sink.write(vertical)?;
            pending.push(output.pending);
        }
        sink.write("\n")?;

        Ok(pending)
    }

    /// Write a logical row across as many physical lines as it needs, up to
    /// `budget`. Returns the number of lines written.
    ///
    /// The first line trims only when the budget is a single line. Each
    /// continuation line renders the pending tails of the previous one, and
    /// the last line the budget allows always trims. Anything still pending
    /// after that is dropped.
    pub fn render_wrapped<S, K>(&self, row: &[S], budget: LineBudget, sink: &mut K) -> Result<usize>
    where
        S: AsRef<str>,
        K: Sink + ?Sized,
    {
        let budget = budget.get();
        let mut lines = 1;
        let mut pending = self.render_row(row, budget == 1, sink)?;

        while lines < budget && has_pending(&pending) {
            let force_trim = lines >= budget - 1;
            let next: Vec<String> = pending.into_iter().map(Option::unwrap_or_default).collect();
            pending = self.render_row(&next, force_trim, sink)?;
            lines += 1;
        }

        if lines > 1 {
            log::trace!("row wrapped over {} of {} lines", lines, budget);
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(w: &[usize]) -> ResolvedWidths {
        ResolvedWidths {
            widths: w.to_vec(),
        }
    }

    fn lines(out: &str) -> Vec<&str> {
        out.lines().collect()
    }

    // --- format_cell ---

    #[test]
    fn fitting_cell_is_padded() {
        let out = format_cell("abc", 6, false);
        assert_eq!(out.text, "abc   ");
        assert_eq!(out.pending, None);
        assert!(!out.truncated);
    }

    #[test]
    fn exact_fit_is_not_trimmed() {
        let out = format_cell("abcdef", 6, true);
        assert_eq!(out.text, "abcdef");
        assert_eq!(out.pending, None);
        assert!(!out.truncated);
    }

    #[test]
    fn forced_trim_appends_marker() {
        let out = format_cell("abcdefghij", 6, true);
        assert_eq!(out.text, "abc...");
        assert_eq!(out.pending, None);
        assert!(out.truncated);
    }

    #[test]
    fn forced_trim_narrower_than_marker() {
        let out = format_cell("abcdefghij", 2, true);
        assert_eq!(out.text, "..");
        assert_eq!(out.pending, None);

        assert_eq!(format_cell("abcdefghij", 0, true).text, "");
    }

    #[test]
    fn overflow_without_trim_splits() {
        let out = format_cell("abcdefghij", 4, false);
        assert_eq!(out.text, "abcd");
        assert_eq!(out.pending.as_deref(), Some("efghij"));
        assert!(!out.truncated);
    }

    #[test]
    fn zero_width_column_defers_everything() {
        let out = format_cell("abc", 0, false);
        assert_eq!(out.text, "");
        assert_eq!(out.pending.as_deref(), Some("abc"));
    }

    // --- LineBudget ---

    #[test]
    fn line_budget_rejects_zero() {
        let err = LineBudget::new(0).unwrap_err();
        assert!(matches!(err, TableError::InvalidLineBudget(0)));
    }

    #[test]
    fn line_budget_default_is_single() {
        assert_eq!(LineBudget::default().get(), 1);
        assert_eq!(LineBudget::new(3).unwrap().get(), 3);
    }

    // --- render_row ---

    #[test]
    fn render_row_writes_bordered_line() {
        let w = widths(&[4, 3]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        let pending = renderer
            .render_row(&["ab", "xyz"], false, &mut out)
            .unwrap();
        assert_eq!(out, "|ab  |xyz|\n");
        assert_eq!(pending, vec![None, None]);
    }

    #[test]
    fn render_row_pads_missing_cells() {
        let w = widths(&[2, 2, 2]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        let pending = renderer.render_row(&["a"], false, &mut out).unwrap();
        assert_eq!(out, "|a |  |  |\n");
        assert_eq!(pending.len(), 3);
    }

    #[test]
    fn render_row_ignores_extra_cells() {
        let w = widths(&[2]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        renderer
            .render_row(&["a", "b", "c"], false, &mut out)
            .unwrap();
        assert_eq!(out, "|a |\n");
    }

    #[test]
    fn render_row_reports_continuations() {
        let w = widths(&[3, 3]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        let pending = renderer
            .render_row(&["abcdef", "xy"], false, &mut out)
            .unwrap();
        assert_eq!(out, "|abc|xy |\n");
        assert_eq!(pending, vec![Some("def".to_string()), None]);
    }

    #[test]
    fn render_row_uses_border_style() {
        let w = widths(&[2]);
        let renderer = RowRenderer::new(&w, BorderStyle::Light);
        let mut out = String::new();
        renderer.render_row(&["x"], false, &mut out).unwrap();
        assert_eq!(out, "│x │\n");
    }

    // --- render_wrapped ---

    #[test]
    fn single_line_budget_trims_immediately() {
        let w = widths(&[6]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        let n = renderer
            .render_wrapped(&["abcdefghij"], LineBudget::SINGLE, &mut out)
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(out, "|abc...|\n");
    }

    #[test]
    fn fitting_row_takes_one_line_regardless_of_budget() {
        let w = widths(&[6]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        let n = renderer
            .render_wrapped(&["short"], LineBudget::new(5).unwrap(), &mut out)
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn forty_five_chars_in_width_twenty_budget_two() {
        let cell: String = ('a'..='z').chain('A'..='S').collect();
        assert_eq!(cell.chars().count(), 45);

        let w = widths(&[20]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        let n = renderer
            .render_wrapped(&[cell.as_str()], LineBudget::new(2).unwrap(), &mut out)
            .unwrap();

        assert_eq!(n, 2);
        let first = format!("|{}|", &cell[..20]);
        let second = format!("|{}...|", &cell[20..37]);
        assert_eq!(lines(&out), vec![first, second]);
    }

    #[test]
    fn wrap_stops_once_content_is_exhausted() {
        let w = widths(&[4]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        let n = renderer
            .render_wrapped(&["abcdefgh"], LineBudget::new(5).unwrap(), &mut out)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(out, "|abcd|\n|efgh|\n");
    }

    #[test]
    fn continuation_lines_render_finished_columns_empty() {
        let w = widths(&[3, 2]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        renderer
            .render_wrapped(&["abcdef", "xy"], LineBudget::new(3).unwrap(), &mut out)
            .unwrap();
        assert_eq!(out, "|abc|xy|\n|def|  |\n");
    }

    #[test]
    fn short_row_does_not_loop() {
        let w = widths(&[2, 2, 2]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        let n = renderer
            .render_wrapped(&["abcd"], LineBudget::new(10).unwrap(), &mut out)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(out, "|ab|  |  |\n|cd|  |  |\n");
    }

    #[test]
    fn zero_width_columns_stop_at_budget() {
        let w = widths(&[0]);
        let renderer = RowRenderer::new(&w, BorderStyle::Ascii);
        let mut out = String::new();
        let n = renderer
            .render_wrapped(&["abc"], LineBudget::new(4).unwrap(), &mut out)
            .unwrap();
        assert_eq!(n, 4);
        assert_eq!(out, "||\n||\n||\n||\n");
    }
}
