//! Top-level query assembly.
//!
//! A [`Query`] owns the flushed condition groups, the logic keywords between
//! them, and the flattened values in placeholder order. It also carries the
//! ORDER BY list and an optional row limit.
//!
//! ```
//! use gormqy::{Query, Value};
//!
//! let mut q = Query::new();
//! q.condition()
//!     .eq("name", "Tom")
//!     .and()
//!     .gt("age", 10)
//!     .end_with_group()
//!     .or_condition()
//!     .eq("name", "Sam")
//!     .and()
//!     .le("age", 5)
//!     .end_with_group();
//!
//! let (sql, vals) = q.where_clause();
//! assert_eq!(sql, "(name = ? AND age > ?) OR (name = ? AND age <= ?)");
//! assert_eq!(vals.len(), 4);
//! ```

use crate::condition::ConditionBuilder;
use crate::logic::Logic;
use crate::value::Value;

/// Root accumulator for WHERE / ORDER BY / LIMIT fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Flushed groups and the logic keywords between them
    where_exprs: Vec<String>,
    /// Values in placeholder order across `where_exprs`
    where_vals: Vec<Value>,
    pub(crate) orders: Vec<String>,
    limit: u64,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a condition group with no leading keyword.
    pub fn condition(&mut self) -> ConditionBuilder<'_> {
        ConditionBuilder::new(self)
    }

    /// Start a condition group joined to the previous ones with `AND`.
    pub fn and_condition(&mut self) -> ConditionBuilder<'_> {
        self.join_condition(Logic::And)
    }

    /// Start a condition group joined to the previous ones with `OR`.
    pub fn or_condition(&mut self) -> ConditionBuilder<'_> {
        self.join_condition(Logic::Or)
    }

    /// Start a condition group joined with `logic`.
    ///
    /// The keyword is only emitted when an earlier group exists; on an empty
    /// query this is the same as [`Query::condition`].
    pub fn join_condition(&mut self, logic: Logic) -> ConditionBuilder<'_> {
        if !self.where_exprs.is_empty() {
            self.where_exprs.push(logic.as_str().to_string());
        }
        ConditionBuilder::new(self)
    }

    /// Parenthesize everything built so far, then start an `AND` group.
    ///
    /// `(A) OR (B)` followed by this becomes `((A) OR (B)) AND ...`.
    pub fn and_condition_after_group(&mut self) -> ConditionBuilder<'_> {
        self.group_conditions().join_condition(Logic::And)
    }

    /// Parenthesize everything built so far, then start an `OR` group.
    pub fn or_condition_after_group(&mut self) -> ConditionBuilder<'_> {
        self.group_conditions().join_condition(Logic::Or)
    }

    /// Collapse all flushed groups into a single parenthesized group.
    ///
    /// Values keep their order, so placeholder alignment is unchanged.
    pub fn group_conditions(&mut self) -> &mut Self {
        if self.where_exprs.is_empty() {
            return self;
        }

        let grouped = format!("({})", self.where_exprs.join(" "));
        #[cfg(feature = "tracing")]
        crate::trace::regrouped(&grouped, self.where_exprs.len());

        self.where_exprs = vec![grouped];
        self
    }

    pub(crate) fn push_group(&mut self, expr: String, values: Vec<Value>) {
        self.where_exprs.push(expr);
        self.where_vals.extend(values);
    }

    /// Check if no condition group has been flushed yet.
    pub fn is_empty(&self) -> bool {
        self.where_exprs.is_empty()
    }

    /// The WHERE predicate (without the `WHERE` keyword) and its values.
    ///
    /// Returns an empty string and no values when no group was ever flushed.
    /// `values[i]` binds to the i-th `?` from the left.
    pub fn where_clause(&self) -> (String, Vec<Value>) {
        (self.where_sql(), self.where_vals.clone())
    }

    /// The WHERE predicate alone.
    pub fn where_sql(&self) -> String {
        self.where_exprs.join(" ")
    }

    /// The bound values alone, in placeholder order.
    pub fn where_values(&self) -> &[Value] {
        &self.where_vals
    }

    /// Consume the query into its WHERE predicate and values.
    pub fn into_where(self) -> (String, Vec<Value>) {
        (self.where_exprs.join(" "), self.where_vals)
    }

    /// Set the row limit. `0` means no limit.
    pub fn add_limit(&mut self, limit: u64) -> &mut Self {
        self.limit = limit;
        self
    }

    /// The row limit, `0` if unset.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}
