//! Where the total table width comes from.

use terminal_size::{Height, Width};

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Source of the total table width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthSource {
    /// Always use this width.
    Fixed(usize),
    /// Query the terminal on every render.
    #[default]
    Terminal,
}

impl WidthSource {
    /// Resolve to a concrete width.
    ///
    /// `Terminal` falls back to [`DEFAULT_WIDTH`] when stdout is not a terminal.
    pub fn resolve(&self) -> usize {
        match self {
            WidthSource::Fixed(width) => *width,
            WidthSource::Terminal => terminal_width().unwrap_or(DEFAULT_WIDTH),
        }
    }
}

impl From<usize> for WidthSource {
    fn from(width: usize) -> Self {
        WidthSource::Fixed(width)
    }
}

impl From<Option<usize>> for WidthSource {
    fn from(width: Option<usize>) -> Self {
        width.map_or(WidthSource::Terminal, WidthSource::Fixed)
    }
}

/// Current terminal width in columns, if stdout is a terminal.
pub fn terminal_width() -> Option<usize> {
    reported_width(terminal_size::terminal_size())
}

/// Some pseudo-terminals report zero columns; that counts as unknown.
fn reported_width(size: Option<(Width, Height)>) -> Option<usize> {
    size.map(|(w, _)| w.0 as usize).filter(|&w| w > 0)
}
