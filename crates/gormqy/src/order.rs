//! ORDER BY accumulation.

use crate::column::Column;
use crate::query::Query;
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderMethod {
    #[default]
    Asc,
    Desc,
}

impl OrderMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderMethod::Asc => "ASC",
            OrderMethod::Desc => "DESC",
        }
    }
}

impl fmt::Display for OrderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Query {
    /// Append `column ASC`.
    pub fn asc(&mut self, column: impl Into<Column>) -> &mut Self {
        self.add_order(column, OrderMethod::Asc)
    }

    /// Append `column DESC`.
    pub fn desc(&mut self, column: impl Into<Column>) -> &mut Self {
        self.add_order(column, OrderMethod::Desc)
    }

    /// Append `column <method>`. Entries keep call order.
    pub fn add_order(&mut self, column: impl Into<Column>, method: OrderMethod) -> &mut Self {
        self.orders.push(format!("{} {}", column.into(), method));
        self
    }

    /// The ORDER BY list (without the keyword), e.g. `id ASC, name DESC`.
    pub fn order(&self) -> String {
        self.orders.join(", ")
    }

    /// Check if any ordering was added.
    pub fn has_order(&self) -> bool {
        !self.orders.is_empty()
    }
}
