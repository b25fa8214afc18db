//! Predicate accumulation for one condition group.
//!
//! A [`ConditionBuilder`] collects `column <op> ?` fragments and their bound
//! values. Every predicate method consumes the builder and hands back a
//! [`LogicJoiner`], so a logic keyword can only ever follow a predicate:
//!
//! ```
//! use gormqy::{Query, Value};
//!
//! let mut q = Query::new();
//! q.condition().eq("name", "Tom").and().gt("age", 10).end();
//!
//! let (sql, vals) = q.where_clause();
//! assert_eq!(sql, "name = ? AND age > ?");
//! assert_eq!(vals, vec![Value::from("Tom"), Value::from(10)]);
//! ```

use crate::column::Column;
use crate::logic::{Logic, LogicJoiner};
use crate::query::Query;
use crate::value::Value;
use std::fmt::Display;

/// Comparison operator of a single predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `col = ?`
    Eq,
    /// `col != ?`
    NotEq,
    /// `col >= ?`
    Ge,
    /// `col <= ?`
    Le,
    /// `col > ?`
    Gt,
    /// `col < ?`
    Lt,
    /// `col LIKE ?` bound to `%v%`
    Contain,
    /// `col LIKE ?` bound to `v%`
    Prefix,
    /// `col LIKE ?` bound to `%v`
    Suffix,
    /// `col IN (?)` bound to the whole collection
    In,
    /// `col NOT IN (?)` bound to the whole collection
    NotIn,
}

impl Operator {
    /// Render the predicate template for `column`. Always exactly one `?`.
    pub fn render(self, column: &Column) -> String {
        match self {
            Operator::Eq => format!("{column} = ?"),
            Operator::NotEq => format!("{column} != ?"),
            Operator::Ge => format!("{column} >= ?"),
            Operator::Le => format!("{column} <= ?"),
            Operator::Gt => format!("{column} > ?"),
            Operator::Lt => format!("{column} < ?"),
            Operator::Contain | Operator::Prefix | Operator::Suffix => {
                format!("{column} LIKE ?")
            }
            Operator::In => format!("{column} IN (?)"),
            Operator::NotIn => format!("{column} NOT IN (?)"),
        }
    }

    /// Shape the value bound for this operator.
    ///
    /// Pattern operators format the value to text and add `%` wildcards;
    /// everything else binds the value unchanged.
    pub fn bind(self, value: Value) -> Value {
        match self {
            Operator::Contain => Value::Text(format!("%{value}%")),
            Operator::Prefix => Value::Text(format!("{value}%")),
            Operator::Suffix => Value::Text(format!("%{value}")),
            _ => value,
        }
    }

    /// Check if this is one of the `LIKE` operators.
    pub fn is_pattern(self) -> bool {
        matches!(self, Operator::Contain | Operator::Prefix | Operator::Suffix)
    }
}

/// Accumulates the predicates of one condition group.
///
/// Obtained from [`Query::condition`] (or its `and_`/`or_` variants) and
/// consumed when the group is flushed with [`LogicJoiner::end`] or
/// [`LogicJoiner::end_with_group`]. Dropping a chain before that discards it.
#[must_use = "a condition chain does nothing until it is ended"]
pub struct ConditionBuilder<'q> {
    query: &'q mut Query,
    fragments: Vec<String>,
    values: Vec<Value>,
    /// `(` to prefix onto the next predicate
    pending_open: usize,
    /// opened minus closed brackets
    depth: isize,
}

impl<'q> ConditionBuilder<'q> {
    pub(crate) fn new(query: &'q mut Query) -> Self {
        Self {
            query,
            fragments: Vec::new(),
            values: Vec::new(),
            pending_open: 0,
            depth: 0,
        }
    }

    /// Open a bracket in front of the next predicate.
    ///
    /// Close it with [`LogicJoiner::end_group`]. Calls stack, so
    /// `begin_group().begin_group()` opens two levels.
    pub fn begin_group(mut self) -> Self {
        self.pending_open += 1;
        self
    }

    /// Add a predicate with an explicit operator.
    pub fn compare(
        self,
        column: impl Into<Column>,
        op: Operator,
        value: impl Into<Value>,
    ) -> LogicJoiner<'q> {
        let column = column.into();
        self.add(op.render(&column), op.bind(value.into()))
    }

    /// `column = ?`
    pub fn eq(self, column: impl Into<Column>, value: impl Into<Value>) -> LogicJoiner<'q> {
        self.compare(column, Operator::Eq, value)
    }

    /// `column != ?`
    pub fn not_eq(self, column: impl Into<Column>, value: impl Into<Value>) -> LogicJoiner<'q> {
        self.compare(column, Operator::NotEq, value)
    }

    /// `column >= ?`
    pub fn ge(self, column: impl Into<Column>, value: impl Into<Value>) -> LogicJoiner<'q> {
        self.compare(column, Operator::Ge, value)
    }

    /// `column <= ?`
    pub fn le(self, column: impl Into<Column>, value: impl Into<Value>) -> LogicJoiner<'q> {
        self.compare(column, Operator::Le, value)
    }

    /// `column > ?`
    pub fn gt(self, column: impl Into<Column>, value: impl Into<Value>) -> LogicJoiner<'q> {
        self.compare(column, Operator::Gt, value)
    }

    /// `column < ?`
    pub fn lt(self, column: impl Into<Column>, value: impl Into<Value>) -> LogicJoiner<'q> {
        self.compare(column, Operator::Lt, value)
    }

    /// `column LIKE ?` with `%value%` bound.
    pub fn contain(self, column: impl Into<Column>, value: impl Display) -> LogicJoiner<'q> {
        self.compare(column, Operator::Contain, value.to_string())
    }

    /// `column LIKE ?` with `value%` bound.
    pub fn prefix(self, column: impl Into<Column>, value: impl Display) -> LogicJoiner<'q> {
        self.compare(column, Operator::Prefix, value.to_string())
    }

    /// `column LIKE ?` with `%value` bound.
    pub fn suffix(self, column: impl Into<Column>, value: impl Display) -> LogicJoiner<'q> {
        self.compare(column, Operator::Suffix, value.to_string())
    }

    /// `column IN (?)`, binding the whole collection as one value.
    pub fn in_list<I, T>(self, column: impl Into<Column>, values: I) -> LogicJoiner<'q>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.compare(column, Operator::In, Value::list(values))
    }

    /// `column NOT IN (?)`, binding the whole collection as one value.
    pub fn not_in<I, T>(self, column: impl Into<Column>, values: I) -> LogicJoiner<'q>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.compare(column, Operator::NotIn, Value::list(values))
    }

    fn add(mut self, expr: String, value: Value) -> LogicJoiner<'q> {
        let expr = if self.pending_open > 0 {
            let opened = "(".repeat(self.pending_open);
            self.depth += self.pending_open as isize;
            self.pending_open = 0;
            opened + &expr
        } else {
            expr
        };

        self.fragments.push(expr);
        self.values.push(value);
        LogicJoiner::new(self)
    }

    pub(crate) fn push_logic(&mut self, logic: Logic) {
        self.fragments.push(logic.as_str().to_string());
    }

    pub(crate) fn close_last(&mut self) {
        if let Some(last) = self.fragments.last_mut() {
            last.push(')');
            self.depth -= 1;
        }
    }

    /// Move the group into the owning query. An empty group leaves it untouched.
    pub(crate) fn flush(self, group: bool) -> &'q mut Query {
        if self.fragments.is_empty() {
            return self.query;
        }

        let joined = self.fragments.join(" ");
        let expr = if group { format!("({joined})") } else { joined };

        #[cfg(feature = "tracing")]
        {
            if self.depth != 0 {
                crate::trace::unbalanced_group(&expr, self.depth);
            }
            crate::trace::group_flushed(&expr, self.values.len());
        }

        self.query.push_group(expr, self.values);
        self.query
    }
}

impl std::fmt::Debug for ConditionBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionBuilder")
            .field("fragments", &self.fragments)
            .field("values", &self.values)
            .field("pending_open", &self.pending_open)
            .finish()
    }
}
