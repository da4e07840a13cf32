//! Width resolution algorithm for table columns.
//!
//! This module turns a total width and a set of column weights into one
//! integer width per column. Every column boundary (both outer borders and
//! each separator) reserves one character, so for `n` columns the usable
//! content width is `total - n - 1`.

use crate::error::{Result, TableError};
use crate::weights::ColumnWeights;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in characters, borders excluded.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all columns (without borders).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Total width including the outer borders and one separator per
    /// column boundary.
    pub fn total_with_borders(&self) -> usize {
        self.total() + border_overhead(self.len())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Iterate over the column widths.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.widths.iter().copied()
    }
}

/// Characters taken by borders and separators for `columns` columns.
pub fn border_overhead(columns: usize) -> usize {
    columns + 1
}

/// Allocate column widths from normalized weights.
///
/// `weights` holds the explicitly configured weights; columns beyond them
/// share the remainder equally (see [`ColumnWeights::normalize`]). Every
/// column but the last gets `floor(weight * usable)`; the last column absorbs
/// whatever is left so the widths always add up exactly.
///
/// # Arguments
///
/// * `total_width` - Total available width including borders
/// * `columns` - Number of columns to lay out
/// * `weights` - Explicit weights, possibly fewer than `columns`
///
/// # Example
///
/// ```rust
/// use spantable::{allocate, ColumnWeights};
///
/// let resolved = allocate(80, 2, &ColumnWeights::equal()).unwrap();
/// assert_eq!(resolved.widths, vec![38, 39]);
/// assert_eq!(resolved.total_with_borders(), 80);
/// ```
pub fn allocate(
    total_width: usize,
    columns: usize,
    weights: &ColumnWeights,
) -> Result<ResolvedWidths> {
    if columns == 0 {
        return Err(TableError::NoColumns);
    }
    if total_width < border_overhead(columns) {
        return Err(TableError::WidthTooNarrow {
            width: total_width,
            columns,
        });
    }
    let fractions = weights.normalize(columns)?;

    let usable = total_width - border_overhead(columns);
    let mut widths: Vec<usize> = Vec::with_capacity(columns);
    let mut remaining = usable;

    for (i, fraction) in fractions.iter().enumerate() {
        // Last column gets all remaining space to avoid rounding errors
        let width = if i == columns - 1 {
            remaining
        } else {
            let floored = (fraction * usable as f64).floor() as usize;
            let share = floored.min(remaining);
            remaining -= share;
            share
        };
        widths.push(width);
    }

    log::debug!(
        "resolved {} columns for width {}: {:?}",
        columns,
        total_width,
        widths
    );
    Ok(ResolvedWidths { widths })
}

/// Allocate column widths from a raw weight slice.
///
/// Same as [`allocate`] but validates `weights` first, for callers that do
/// not hold a [`ColumnWeights`].
pub fn allocate_fractions(
    total_width: usize,
    columns: usize,
    weights: &[f64],
) -> Result<ResolvedWidths> {
    let weights = ColumnWeights::new(weights.to_vec())?;
    allocate(total_width, columns, &weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_equal_two_columns() {
        // Total: 80, overhead: 3, usable: 77
        // Column 1: floor(0.5 * 77) = 38, column 2: 39 (remaining)
        let resolved = allocate(80, 2, &ColumnWeights::equal()).unwrap();
        assert_eq!(resolved.widths, vec![38, 39]);
    }

    #[test]
    fn resolve_explicit_weights() {
        // usable 77: floor(0.8 * 77) = 61, last gets 16
        let weights = ColumnWeights::new(vec![0.8, 0.2]).unwrap();
        let resolved = allocate(80, 2, &weights).unwrap();
        assert_eq!(resolved.widths, vec![61, 16]);
        assert_eq!(resolved.total_with_borders(), 80);
    }

    #[test]
    fn resolve_partial_weights() {
        let weights = ColumnWeights::new(vec![0.5]).unwrap();
        let resolved = allocate(80, 2, &weights).unwrap();
        assert_eq!(resolved.widths, vec![38, 39]);
    }

    #[test]
    fn resolve_last_column_absorbs_remainder() {
        // usable: 12 - 4 = 8, floor(8/3) = 2, 2, last gets 4
        let resolved = allocate(12, 3, &ColumnWeights::equal()).unwrap();
        assert_eq!(resolved.widths, vec![2, 2, 4]);
    }

    #[test]
    fn resolve_last_column_ignores_its_own_weight() {
        // Weights only sum to 0.5 but the last column still takes the rest
        let weights = ColumnWeights::new(vec![0.25, 0.25]).unwrap();
        let resolved = allocate(43, 2, &weights).unwrap();
        assert_eq!(resolved.widths, vec![10, 30]);
    }

    #[test]
    fn resolve_single_column() {
        let resolved = allocate(20, 1, &ColumnWeights::equal()).unwrap();
        assert_eq!(resolved.widths, vec![18]);
    }

    #[test]
    fn resolve_minimum_width_gives_empty_columns() {
        let resolved = allocate(4, 3, &ColumnWeights::equal()).unwrap();
        assert_eq!(resolved.widths, vec![0, 0, 0]);
    }

    #[test]
    fn resolve_too_narrow_fails() {
        let err = allocate(3, 3, &ColumnWeights::equal()).unwrap_err();
        assert!(matches!(
            err,
            TableError::WidthTooNarrow {
                width: 3,
                columns: 3
            }
        ));
    }

    #[test]
    fn resolve_zero_columns_fails() {
        let err = allocate(80, 0, &ColumnWeights::equal()).unwrap_err();
        assert!(matches!(err, TableError::NoColumns));
    }

    #[test]
    fn resolve_raw_fractions_validated() {
        let err = allocate_fractions(80, 2, &[0.9, 0.2]).unwrap_err();
        assert!(matches!(err, TableError::WeightsExceedOne { .. }));
    }

    #[test]
    fn resolved_widths_accessors() {
        let resolved = ResolvedWidths {
            widths: vec![10, 20, 30],
        };

        assert_eq!(resolved.get(0), Some(10));
        assert_eq!(resolved.get(1), Some(20));
        assert_eq!(resolved.get(2), Some(30));
        assert_eq!(resolved.get(3), None);
        assert_eq!(resolved.total(), 60);
        assert_eq!(resolved.total_with_borders(), 64);
        assert_eq!(resolved.len(), 3);
        assert!(!resolved.is_empty());
        assert_eq!(resolved.iter().collect::<Vec<_>>(), vec![10, 20, 30]);
    }
}
