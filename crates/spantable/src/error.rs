//! Error types for table layout and rendering.
//!
//! This module provides [`TableError`], the single error type returned by the
//! library. Most variants describe configuration problems and are raised before
//! any output is written; only [`TableError::Io`] can occur mid-render.

use std::io;

/// Errors that can occur while configuring or rendering a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The line budget must allow at least one physical line per row.
    #[error("lines per row must be a positive integer, got {0}")]
    InvalidLineBudget(usize),

    /// Explicit column weights add up to more than the full width.
    #[error("column weights must not sum to more than 1, got {sum}")]
    WeightsExceedOne { sum: f64 },

    /// A single weight is negative, NaN or infinite.
    #[error("column weight {index} must be a finite value in [0, 1], got {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    /// More weights were supplied than there are columns to apply them to.
    #[error("{weights} column weights given for {columns} columns")]
    TooManyWeights { weights: usize, columns: usize },

    /// The total width cannot hold the borders and separators.
    #[error("width {width} is too narrow for {columns} columns (need at least {})", .columns + 1)]
    WidthTooNarrow { width: usize, columns: usize },

    /// Width allocation was requested for zero columns.
    #[error("a table needs at least one column")]
    NoColumns,

    /// A configuration document could not be parsed.
    #[error("invalid table configuration: {0}")]
    Config(String),

    /// The output sink rejected a write.
    #[error("failed to write table output: {0}")]
    Io(#[from] io::Error),
}

impl TableError {
    /// Returns `true` for errors caused by invalid configuration rather than
    /// by the output sink.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, TableError::Io(_))
    }
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TableError::WeightsExceedOne { sum: 1.1 };
        assert!(err.to_string().contains("sum to more than 1"));
        assert!(err.to_string().contains("1.1"));
    }

    #[test]
    fn test_width_too_narrow_reports_minimum() {
        let err = TableError::WidthTooNarrow {
            width: 2,
            columns: 3,
        };
        assert_eq!(
            err.to_string(),
            "width 2 is too narrow for 3 columns (need at least 4)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_configuration_kinds() {
        assert!(TableError::InvalidLineBudget(0).is_configuration());
        assert!(TableError::NoColumns.is_configuration());
        assert!(TableError::Config("bad".into()).is_configuration());
    }

    #[test]
    fn test_from_yaml_error() {
        let parsed: serde_yaml::Result<Vec<u32>> = serde_yaml::from_str("{ not: a list }");
        let err: TableError = parsed.unwrap_err().into();
        assert!(matches!(err, TableError::Config(_)));
    }
}
