//! Logic keywords and the handle that sits between two predicates.

use crate::condition::ConditionBuilder;
use crate::query::Query;
use std::fmt;

/// Boolean connective between predicates or groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logic {
    And,
    Or,
}

impl Logic {
    pub fn as_str(self) -> &'static str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned after each predicate.
///
/// From here a chain can only continue with a logic keyword, close a bracket,
/// or end the group; adding a second predicate directly is not possible.
#[must_use = "a condition chain does nothing until it is ended"]
#[derive(Debug)]
pub struct LogicJoiner<'q> {
    cond: ConditionBuilder<'q>,
}

impl<'q> LogicJoiner<'q> {
    pub(crate) fn new(cond: ConditionBuilder<'q>) -> Self {
        Self { cond }
    }

    /// Join the next predicate with `AND`.
    pub fn and(self) -> ConditionBuilder<'q> {
        self.join(Logic::And)
    }

    /// Join the next predicate with `OR`.
    pub fn or(self) -> ConditionBuilder<'q> {
        self.join(Logic::Or)
    }

    /// Join the next predicate with the given keyword.
    pub fn join(mut self, logic: Logic) -> ConditionBuilder<'q> {
        self.cond.push_logic(logic);
        self.cond
    }

    /// Close a bracket opened by [`ConditionBuilder::begin_group`] after the
    /// most recent predicate.
    ///
    /// ```
    /// use gormqy::Query;
    ///
    /// let mut q = Query::new();
    /// q.condition()
    ///     .begin_group()
    ///     .eq("a", 1)
    ///     .or()
    ///     .eq("b", 2)
    ///     .end_group()
    ///     .and()
    ///     .eq("c", 3)
    ///     .end();
    /// assert_eq!(q.where_sql(), "(a = ? OR b = ?) AND c = ?");
    /// ```
    pub fn end_group(mut self) -> Self {
        self.cond.close_last();
        self
    }

    /// Flush the group into the query as-is.
    pub fn end(self) -> &'q mut Query {
        self.cond.flush(false)
    }

    /// Flush the group into the query wrapped in one pair of parentheses.
    pub fn end_with_group(self) -> &'q mut Query {
        self.cond.flush(true)
    }
}
