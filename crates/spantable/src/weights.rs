//! Proportional column weights.
//!
//! A [`ColumnWeights`] holds the fractions explicitly configured for the
//! leading columns of a table. It may cover fewer columns than the table ends
//! up having: [`ColumnWeights::normalize`] hands every unweighted column an
//! equal share of whatever fraction is left over.

use crate::error::{Result, TableError};

/// Slack allowed when comparing the sum of `count` weights against 1.
///
/// Weights such as `0.1, 0.2, 0.7` add up to `1.0000000000000002` in binary
/// floating point; they are still a valid configuration. Each addition may
/// round by at most one unit in the last place, so the slack grows with the
/// number of weights and never admits a sum that is really over 1.
fn sum_tolerance(count: usize) -> f64 {
    count as f64 * f64::EPSILON
}

/// Explicitly configured column weights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnWeights {
    explicit: Vec<f64>,
}

impl ColumnWeights {
    /// No explicit weights: every column gets an equal share.
    pub fn equal() -> Self {
        ColumnWeights::default()
    }

    /// Validate and store explicit weights for the leading columns.
    ///
    /// Fails if any weight is negative or not finite, or if the weights sum
    /// to more than 1.
    pub fn new(weights: impl Into<Vec<f64>>) -> Result<Self> {
        let explicit = weights.into();
        validate(&explicit)?;
        Ok(ColumnWeights { explicit })
    }

    /// The explicitly configured weights.
    pub fn explicit(&self) -> &[f64] {
        &self.explicit
    }

    /// Number of explicitly weighted columns.
    pub fn len(&self) -> usize {
        self.explicit.len()
    }

    /// Returns `true` when no weights were configured.
    pub fn is_empty(&self) -> bool {
        self.explicit.is_empty()
    }

    /// Sum of the explicit weights.
    pub fn sum(&self) -> f64 {
        self.explicit.iter().sum()
    }

    /// Expand to one weight per column.
    ///
    /// Unweighted columns share the remaining fraction `1 - sum` equally.
    /// Fails with [`TableError::TooManyWeights`] if more weights were
    /// configured than `columns`, and with [`TableError::NoColumns`] when
    /// `columns` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spantable::ColumnWeights;
    ///
    /// let weights = ColumnWeights::new(vec![0.5]).unwrap();
    /// assert_eq!(weights.normalize(3).unwrap(), vec![0.5, 0.25, 0.25]);
    ///
    /// let equal = ColumnWeights::equal();
    /// assert_eq!(equal.normalize(4).unwrap(), vec![0.25; 4]);
    /// ```
    pub fn normalize(&self, columns: usize) -> Result<Vec<f64>> {
        if columns == 0 {
            return Err(TableError::NoColumns);
        }
        if self.explicit.len() > columns {
            return Err(TableError::TooManyWeights {
                weights: self.explicit.len(),
                columns,
            });
        }

        let unweighted = columns - self.explicit.len();
        let mut weights = Vec::with_capacity(columns);
        weights.extend_from_slice(&self.explicit);
        if unweighted > 0 {
            let remaining = (1.0 - self.sum()).max(0.0);
            let share = remaining / unweighted as f64;
            weights.extend(std::iter::repeat_n(share, unweighted));
        }
        Ok(weights)
    }
}

/// Check a raw weight list against the configuration rules.
fn validate(weights: &[f64]) -> Result<()> {
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(TableError::InvalidWeight { index, weight });
        }
    }
    let sum: f64 = weights.iter().sum();
    if sum > 1.0 + sum_tolerance(weights.len()) {
        return Err(TableError::WeightsExceedOne { sum });
    }
    Ok(())
}
