//! # gormqy
//!
//! Fluent, placeholder-safe WHERE / ORDER BY / pagination fragments.
//!
//! gormqy does not run queries. It assembles a predicate template with `?`
//! placeholders plus the values to bind, and hands both to whatever executes
//! SQL.
//!
//! ## Features
//!
//! - **Typed chain**: predicates and logic keywords alternate, enforced by the
//!   types (`ConditionBuilder` → `LogicJoiner` → `ConditionBuilder` ...)
//! - **Aligned values**: `values[i]` always binds to the i-th `?`
//! - **Grouping**: whole-group parentheses, explicit `begin_group`/`end_group`
//!   nesting, and regrouping of everything built so far
//! - **Ordering and pagination**: `asc`/`desc`, `PageQuery` with page/size/offset
//! - **Postgres hand-off** (feature `postgres`): `$n` numbering and `ToSql` values
//!
//! ## Example
//!
//! ```
//! use gormqy::{PageQuery, Value};
//!
//! let mut q = PageQuery::new(1, 20);
//! q.condition()
//!     .prefix("name", "T")
//!     .or()
//!     .suffix("name", "m")
//!     .end_with_group()
//!     .and_condition()
//!     .in_list("age", [10, 20])
//!     .end();
//! q.asc("id").desc("name");
//!
//! let (sql, vals) = q.where_clause();
//! assert_eq!(sql, "(name LIKE ? OR name LIKE ?) AND age IN (?)");
//! assert_eq!(vals[0], Value::from("T%"));
//! assert_eq!(vals[2], Value::from(vec![10, 20]));
//! assert_eq!(q.order(), "id ASC, name DESC");
//! assert_eq!(q.offset(), 0);
//! ```

pub mod column;
pub mod condition;
pub mod error;
pub mod logic;
pub mod order;
pub mod page;
pub mod query;
pub mod value;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "tracing")]
mod trace;


pub use column::{Column, col, concat_col};
pub use condition::{ConditionBuilder, Operator};
pub use error::{QyError, QyResult};
pub use logic::{Logic, LogicJoiner};
pub use order::OrderMethod;
pub use page::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageConfig, PageQuery};
pub use query::Query;
pub use value::Value;

#[cfg(feature = "postgres")]
pub use postgres::{NumberedSql, number_placeholders, number_placeholders_from};
