//! Declarative table configuration.
//!
//! A [`TableConfig`] can be built in code or loaded from YAML:
//!
//! ```rust
//! use spantable::{BorderStyle, TableConfig};
//!
//! let config = TableConfig::from_yaml(r#"
//! width: 100
//! weights: [0.6]
//! lines_per_row: 2
//! titles: [Name, Notes]
//! border: light
//! "#).unwrap();
//!
//! assert_eq!(config.width, Some(100));
//! assert_eq!(config.lines_per_row, 2);
//! assert_eq!(config.border, BorderStyle::Light);
//! ```
//!
//! Every key is optional. Omitting `width` renders at the terminal width.

use std::path::Path;

use serde::Deserialize;

use crate::decorator::BorderStyle;
use crate::error::{Result, TableError};
use crate::render::LineBudget;
use crate::weights::ColumnWeights;
use crate::width::WidthSource;

/// Table settings that can be loaded from a configuration file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Fixed total width; `None` uses the terminal width.
    pub width: Option<usize>,
    /// Column weights for the leading columns.
    pub weights: Vec<f64>,
    /// Maximum physical lines per row.
    pub lines_per_row: usize,
    /// Column titles.
    pub titles: Vec<String>,
    /// Border glyph set.
    pub border: BorderStyle,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            width: None,
            weights: Vec::new(),
            lines_per_row: 1,
            titles: Vec::new(),
            border: BorderStyle::default(),
        }
    }
}

impl TableConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: TableConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Read and parse a YAML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TableError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    /// Check the values without building a table.
    pub fn validate(&self) -> Result<()> {
        self.line_budget()?;
        self.column_weights()?;
        Ok(())
    }

    /// The configured line budget.
    pub fn line_budget(&self) -> Result<LineBudget> {
        LineBudget::new(self.lines_per_row)
    }

    /// The configured column weights.
    pub fn column_weights(&self) -> Result<ColumnWeights> {
        ColumnWeights::new(self.weights.clone())
    }

    /// The configured width source.
    pub fn width_source(&self) -> WidthSource {
        WidthSource::from(self.width)
    }
}
