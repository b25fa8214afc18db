//! Hand-off to tokio-postgres.
//!
//! The builders emit `?` placeholders and bind membership lists as a single
//! value. Postgres wants `$n` placeholders, so [`number_placeholders`] rewrites
//! the clause: the i-th `?` becomes `$n`, and a list bound to a bare `(?)`
//! expands to `($n, $n+1, ...)`.
//!
//! ```
//! use gormqy::Query;
//!
//! let mut q = Query::new();
//! q.condition().eq("status", "active").and().in_list("id", [1, 2, 3]).end();
//!
//! let numbered = q.to_numbered().unwrap();
//! assert_eq!(numbered.sql(), "status = $1 AND id IN ($2, $3, $4)");
//! assert_eq!(numbered.params_ref().len(), 4);
//! ```

use crate::error::{QyError, QyResult};
use crate::query::Query;
use crate::value::Value;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};

/// A clause with `$n` placeholders and one param per placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedSql {
    sql: String,
    params: Vec<Value>,
}

impl NumberedSql {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Get parameter references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

/// Rewrite `?` placeholders to `$1, $2, ...`.
///
/// A `?` inside a single-quoted literal (e.g. a [`concat_col`] separator) is
/// left alone. Any other `?` in column text, such as the jsonb `?` operator,
/// is taken as a placeholder and will fail the count check.
///
/// [`concat_col`]: crate::concat_col
pub fn number_placeholders(sql: &str, values: &[Value]) -> QyResult<NumberedSql> {
    number_placeholders_from(sql, values, 0)
}

/// Count `?` placeholders outside single-quoted literals.
fn count_placeholders(sql: &str) -> usize {
    let mut in_literal = false;
    let mut count = 0;
    for ch in sql.chars() {
        match ch {
            '\'' => in_literal = !in_literal,
            '?' if !in_literal => count += 1,
            _ => {}
        }
    }
    count
}

fn push_placeholder(out: &mut String, idx: usize) {
    out.push('$');
    out.push_str(&idx.to_string());
}

/// Rewrite `?` placeholders with numbering starting after `offset`.
///
/// For example, `offset = 2` makes the first placeholder `$3`; useful when
/// the clause follows other bound parameters such as UPDATE's SET list.
///
/// An empty list renders `IN (NULL)` (never true) and `<> ALL('{}')` in
/// place of `NOT IN (...)` (always true, whatever the column type).
pub fn number_placeholders_from(
    sql: &str,
    values: &[Value],
    offset: usize,
) -> QyResult<NumberedSql> {
    let placeholder_count = count_placeholders(sql);
    if placeholder_count != values.len() {
        return Err(QyError::param_mismatch(placeholder_count, values.len()));
    }

    let mut out = String::with_capacity(sql.len() + values.len() * 2);
    let mut params = Vec::with_capacity(values.len());
    let mut values = values.iter();
    let mut prev = None;
    let mut in_literal = false;
    let mut chars = sql.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\'' {
            in_literal = !in_literal;
        }
        if ch != '?' || in_literal {
            out.push(ch);
            prev = Some(ch);
            continue;
        }

        // counts were checked above
        let Some(value) = values.next() else {
            return Err(QyError::param_mismatch(placeholder_count, params.len()));
        };
        let bare_list = prev == Some('(') && chars.peek() == Some(&')');

        match value {
            Value::List(items) if bare_list && items.is_empty() => {
                if out.ends_with("NOT IN (") {
                    out.truncate(out.len() - "NOT IN (".len());
                    out.push_str("<> ALL('{}')");
                    // drop the closing bracket of `(?)`
                    chars.next();
                } else {
                    out.push_str("NULL");
                }
            }
            Value::List(items) if bare_list => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    params.push(item.clone());
                    push_placeholder(&mut out, offset + params.len());
                }
            }
            _ => {
                params.push(value.clone());
                push_placeholder(&mut out, offset + params.len());
            }
        }
        prev = Some(ch);
    }

    Ok(NumberedSql { sql: out, params })
}

impl Query {
    /// The WHERE predicate with `$n` placeholders and expanded lists.
    pub fn to_numbered(&self) -> QyResult<NumberedSql> {
        number_placeholders(&self.where_sql(), self.where_values())
    }
}

fn encode_int(
    v: i64,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
    match *ty {
        Type::INT2 => {
            let v = i16::try_from(v).map_err(|_| QyError::value_range(v, "INT2"))?;
            v.to_sql_checked(ty, out)
        }
        Type::INT4 => {
            let v = i32::try_from(v).map_err(|_| QyError::value_range(v, "INT4"))?;
            v.to_sql_checked(ty, out)
        }
        _ => v.to_sql_checked(ty, out),
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            Value::Int(v) => encode_int(*v, ty, out),
            Value::UInt(v) => {
                let v = i64::try_from(*v).map_err(|_| QyError::value_range(v, "INT8"))?;
                encode_int(v, ty, out)
            }
            Value::Float(v) => {
                if *ty == Type::FLOAT4 {
                    // narrows without a range check; out-of-range becomes +/-inf
                    (*v as f32).to_sql_checked(ty, out)
                } else {
                    v.to_sql_checked(ty, out)
                }
            }
            Value::Text(v) => v.to_sql_checked(ty, out),
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Timestamp(v) => v.to_sql_checked(ty, out),
            Value::Date(v) => v.to_sql_checked(ty, out),
            Value::Json(v) => v.to_sql_checked(ty, out),
            // encoded as a Postgres array of the member type
            Value::List(items) => items.to_sql(ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}
