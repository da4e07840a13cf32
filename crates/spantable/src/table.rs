//! The table builder and its render pass.
//!
//! [`Table`] accumulates titles, rows and settings through cheap setters and
//! does all the layout work in a single [`Table::layout`] step at render time.
//! Setters that take configuration validate immediately and leave the table
//! unchanged on error.
//!
//! A rendered table looks like this:
//!
//! ```text
//! |==========+==========|
//! |Name      |Notes     |
//! |==========+==========|
//! |Alice     |likes long|
//! |          | walks    |
//! |----------+----------|
//! ```
//!
//! A `Table` is a plain value with no interior synchronization. Mutating it
//! while another thread renders it requires external locking.

use std::io::{self, BufWriter};

use crate::config::TableConfig;
use crate::decorator::{write_rule, BorderStyle, RuleKind};
use crate::error::Result;
use crate::render::{LineBudget, RowRenderer};
use crate::resolve::{allocate, ResolvedWidths};
use crate::sink::{IoSink, Sink};
use crate::traits::{Cell, TableRow};
use crate::weights::ColumnWeights;
use crate::width::WidthSource;

/// Title shown for columns without a configured title.
pub const DEFAULT_TITLE: &str = "Col";

/// A table of text rows rendered at a proportional column layout.
///
/// # Example
///
/// ```rust
/// use spantable::{Table, WidthSource};
///
/// let mut table = Table::new();
/// table
///     .set_width(WidthSource::Fixed(23))
///     .set_titles(["Name", "Notes"])
///     .add_row(["Alice", "likes long walks"]);
/// table.set_lines_per_row(2).unwrap();
///
/// let out = table.render_to_string().unwrap();
/// assert_eq!(
///     out,
///     "|==========+==========|\n\
///      |Name      |Notes     |\n\
///      |==========+==========|\n\
///      |Alice     |likes long|\n\
///      |          | walks    |\n\
///      |----------+----------|\n"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    titles: Vec<String>,
    rows: Vec<Vec<String>>,
    weights: ColumnWeights,
    lines_per_row: LineBudget,
    width: WidthSource,
    border: BorderStyle,
}

/// The resolved geometry of a table for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Total width the table was laid out for.
    pub total_width: usize,
    /// Resolved content width per column.
    pub widths: ResolvedWidths,
    /// One title per column, defaults filled in.
    pub titles: Vec<String>,
}

impl Layout {
    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }
}

impl Table {
    /// Create an empty table: equal column weights, one line per row,
    /// ASCII borders, terminal width.
    pub fn new() -> Self {
        Table::default()
    }

    /// Create a table from a configuration, validating it first.
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        let mut table = Table {
            weights: config.column_weights()?,
            lines_per_row: config.line_budget()?,
            width: config.width_source(),
            border: config.border,
            ..Table::default()
        };
        table.set_titles(&config.titles);
        Ok(table)
    }

    /// Set the proportional width of the leading columns.
    ///
    /// Each weight is a fraction of the usable width. Columns without a
    /// weight share whatever is left equally; an empty list restores equal
    /// widths for all columns. Fails if any weight is negative or the
    /// weights add up to more than 1.
    pub fn set_dimensions(&mut self, weights: impl Into<Vec<f64>>) -> Result<&mut Self> {
        self.weights = ColumnWeights::new(weights)?;
        Ok(self)
    }

    /// Set the maximum number of physical lines a row may occupy.
    ///
    /// Overflowing content wraps onto continuation lines; on the last
    /// allowed line it is trimmed with `...`. Fails for zero.
    pub fn set_lines_per_row(&mut self, lines: usize) -> Result<&mut Self> {
        self.lines_per_row = LineBudget::new(lines)?;
        Ok(self)
    }

    /// Set where the total width comes from.
    pub fn set_width(&mut self, width: impl Into<WidthSource>) -> &mut Self {
        self.width = width.into();
        self
    }

    /// Set the border glyphs.
    pub fn set_border(&mut self, border: BorderStyle) -> &mut Self {
        self.border = border;
        self
    }

    /// Replace the column titles.
    ///
    /// Columns beyond the given titles show [`DEFAULT_TITLE`].
    pub fn set_titles<I>(&mut self, titles: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Cell,
    {
        self.titles = titles.into_iter().map(|t| t.to_cell()).collect();
        self
    }

    /// Remove all titles, so every column shows [`DEFAULT_TITLE`].
    pub fn clear_titles(&mut self) -> &mut Self {
        self.titles.clear();
        self
    }

    /// Append a row of cells.
    ///
    /// Cells are written verbatim, so they should be single-line text: a
    /// `\n` inside a cell ends the physical line early and breaks the grid.
    pub fn add_row<I>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Cell,
    {
        self.rows.push(cells.into_iter().map(|c| c.to_cell()).collect());
        self
    }

    /// Append a row built from a [`TableRow`] value.
    pub fn add_record<T: TableRow + ?Sized>(&mut self, record: &T) -> &mut Self {
        self.rows.push(record.to_row());
        self
    }

    /// Remove all rows, keeping titles and settings.
    pub fn clear_rows(&mut self) -> &mut Self {
        self.rows.clear();
        self
    }

    /// The configured titles, without defaults.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// The rows added so far.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The configured column weights.
    pub fn weights(&self) -> &ColumnWeights {
        &self.weights
    }

    /// The configured line budget.
    pub fn lines_per_row(&self) -> LineBudget {
        self.lines_per_row
    }

    /// The configured width source.
    pub fn width(&self) -> WidthSource {
        self.width
    }

    /// The configured border style.
    pub fn border(&self) -> BorderStyle {
        self.border
    }

    /// Number of columns the table currently renders.
    ///
    /// This is the largest of the title count, the longest row and the
    /// number of configured weights, and never less than one.
    pub fn num_columns(&self) -> usize {
        let widest_row = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        widest_row
            .max(self.titles.len())
            .max(self.weights.len())
            .max(1)
    }

    /// Resolve the geometry for a render at the current width.
    pub fn layout(&self) -> Result<Layout> {
        let total_width = self.width.resolve();
        let columns = self.num_columns();
        let widths = allocate(total_width, columns, &self.weights)?;

        let mut titles = self.titles.clone();
        titles.resize(columns, DEFAULT_TITLE.to_string());

        Ok(Layout {
            total_width,
            widths,
            titles,
        })
    }

    /// Render the whole table into `sink`.
    ///
    /// Layout happens before the first write, so a configuration error never
    /// leaves partial output behind.
    pub fn render<K: Sink + ?Sized>(&self, sink: &mut K) -> Result<()> {
        let layout = self.layout()?;
        let renderer = RowRenderer::new(&layout.widths, self.border);
        log::debug!(
            "rendering {} rows in {} columns at width {}",
            self.rows.len(),
            layout.num_columns(),
            layout.total_width
        );

        write_rule(sink, &layout.widths, self.border, RuleKind::Header)?;
        renderer.render_wrapped(&layout.titles, self.lines_per_row, sink)?;
        write_rule(sink, &layout.widths, self.border, RuleKind::Header)?;

        for row in &self.rows {
            renderer.render_wrapped(row, self.lines_per_row, sink)?;
            write_rule(sink, &layout.widths, self.border, RuleKind::Row)?;
        }
        Ok(())
    }

    /// Render the whole table into a new `String`.
    pub fn render_to_string(&self) -> Result<String> {
        let mut out = String::new();
        self.render(&mut out)?;
        Ok(out)
    }

    /// Render the whole table to standard output.
    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut sink = IoSink::new(BufWriter::new(stdout.lock()));
        self.render(&mut sink)?;
        sink.flush()?;
        Ok(())
    }
}
