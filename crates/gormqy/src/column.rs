//! Column naming helpers.
//!
//! Column text is rendered into the clause as-is; nothing here quotes or
//! validates identifiers. A `?` in column text outside a single-quoted
//! literal (e.g. the jsonb `?` operator) reads as a placeholder when the
//! clause is numbered for Postgres.

use std::fmt;

/// A column (or column expression) as it appears in a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column(String);

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column(name.to_string())
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column(name)
    }
}

impl From<&String> for Column {
    fn from(name: &String) -> Self {
        Column(name.clone())
    }
}

impl From<&Column> for Column {
    fn from(col: &Column) -> Self {
        col.clone()
    }
}

/// Shorthand for [`Column::new`].
pub fn col(name: impl Into<String>) -> Column {
    Column::new(name)
}

/// Concatenate several columns with a separator: `concat_ws('<sep>', a, b, ...)`.
///
/// Handy for searching across several text columns with one pattern:
///
/// ```
/// use gormqy::{col, concat_col};
///
/// let c = concat_col("|", [col("name"), col("addr")]);
/// assert_eq!(c.as_str(), "concat_ws('|', name, addr)");
/// ```
pub fn concat_col<I>(sep: &str, cols: I) -> Column
where
    I: IntoIterator,
    I::Item: Into<Column>,
{
    let cols: Vec<String> = cols.into_iter().map(|c| c.into().into_string()).collect();
    Column(format!("concat_ws('{}', {})", sep, cols.join(", ")))
}
