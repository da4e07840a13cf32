//! Conversion of typed values into table cells.
//!
//! The renderer only ever sees strings. Values are turned into text at the
//! table's input boundary: anything implementing `Display` can be passed to
//! [`Table::add_row`](crate::Table::add_row), and structs can implement
//! [`TableRow`] to be added whole.

/// Trait for types that can be converted to a row of strings.
///
/// # Example
///
/// ```rust
/// use spantable::{Cell, TableRow};
///
/// struct Task {
///     id: u32,
///     title: String,
///     done: bool,
/// }
///
/// impl TableRow for Task {
///     fn to_row(&self) -> Vec<String> {
///         vec![self.id.to_cell(), self.title.to_cell(), self.done.to_cell()]
///     }
/// }
///
/// let task = Task { id: 7, title: "Ship it".into(), done: false };
/// assert_eq!(task.to_row(), vec!["7", "Ship it", "false"]);
/// ```
pub trait TableRow {
    /// Converts this instance to a row of cell values.
    fn to_row(&self) -> Vec<String>;
}

/// Trait for values that implement `Display`.
pub trait Cell {
    fn to_cell(&self) -> String;
}

impl<T: std::fmt::Display + ?Sized> Cell for T {
    fn to_cell(&self) -> String {
        self.to_string()
    }
}

/// Trait for optional values; `None` becomes an empty cell.
pub trait OptionCell {
    fn to_cell(&self) -> String;
}

impl<T: std::fmt::Display> OptionCell for Option<T> {
    fn to_cell(&self) -> String {
        match self {
            Some(v) => v.to_string(),
            None => String::new(),
        }
    }
}

impl<T: TableRow + ?Sized> TableRow for &T {
    fn to_row(&self) -> Vec<String> {
        (**self).to_row()
    }
}
