//! # spantable - Proportional Text Tables
//!
//! `spantable` renders rows of text as a bordered table that spans a fixed
//! width, typically the terminal. Columns get a share of the width according
//! to configurable weights, and cells that do not fit are either trimmed with
//! `...` or wrapped onto a bounded number of continuation lines.
//!
//! ## Core Concepts
//!
//! - [`allocate`]: Split a total width across columns by weight
//! - [`RowRenderer`]: Write one logical row as one or more physical lines
//! - [`LineBudget`]: Maximum physical lines per row before forced trimming
//! - [`Table`]: Builder holding titles, rows and settings
//! - [`Sink`]: Where rendered text goes (a `String`, stdout, any `io::Write`)
//!
//! ## Quick Start
//!
//! ```rust
//! use spantable::{Table, WidthSource};
//!
//! let mut table = Table::new();
//! table
//!     .set_width(WidthSource::Fixed(31))
//!     .set_titles(["Task", "Status"])
//!     .add_row(["Write docs", "done"])
//!     .add_row(["Release a very long awaited version", "pending"]);
//! table.set_dimensions([0.7]).unwrap();
//!
//! let out = table.render_to_string().unwrap();
//! assert_eq!(
//!     out,
//!     "|===================+=========|\n\
//!      |Task               |Status   |\n\
//!      |===================+=========|\n\
//!      |Write docs         |done     |\n\
//!      |-------------------+---------|\n\
//!      |Release a very l...|pending  |\n\
//!      |-------------------+---------|\n"
//! );
//! ```
//!
//! ## Wrapping
//!
//! With more than one line per row, overflowing cells continue on the next
//! line. The last allowed line trims whatever still does not fit:
//!
//! ```rust
//! use spantable::{Table, WidthSource};
//!
//! let mut table = Table::new();
//! table
//!     .set_width(WidthSource::Fixed(14))
//!     .add_row(["abcdefghijklmnopqrstuvwxyz"]);
//! table.set_lines_per_row(2).unwrap();
//!
//! let out = table.render_to_string().unwrap();
//! assert!(out.contains("|abcdefghijkl|\n|mnopqrstu...|\n"));
//! ```
//!
//! ## Configuration Files
//!
//! ```rust
//! use spantable::{Table, TableConfig};
//!
//! let config = TableConfig::from_yaml("width: 40\nlines_per_row: 3\n").unwrap();
//! let table = Table::from_config(&config).unwrap();
//! assert_eq!(table.lines_per_row().get(), 3);
//! ```

pub mod config;
pub mod decorator;
mod error;
pub mod render;
pub mod resolve;
pub mod sink;
pub mod table;
mod traits;
pub mod util;
pub mod weights;
pub mod width;

// Error type
pub use error::{Result, TableError};

// Layout
pub use resolve::{allocate, allocate_fractions, border_overhead, ResolvedWidths};
pub use weights::ColumnWeights;
pub use width::{terminal_width, WidthSource, DEFAULT_WIDTH};

// Rendering
pub use decorator::{BorderStyle, RuleChars, RuleKind};
pub use render::{
    format_cell, has_pending, CellOutput, LineBudget, Pending, RowRenderer, TRUNCATION_MARKER,
};
pub use sink::{IoSink, Sink};

// Table
pub use config::TableConfig;
pub use table::{Layout, Table, DEFAULT_TITLE};
pub use traits::{Cell, OptionCell, TableRow};
