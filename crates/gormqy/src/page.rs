//! Page-number pagination on top of [`Query`].

use crate::query::Query;
use std::ops::{Deref, DerefMut};

/// First page number.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Configuration for page size defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    /// Size used when the requested size is `0`.
    pub default_size: u64,
    /// Upper bound for the page size. `None` means unbounded (default).
    pub max_size: Option<u64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: None,
        }
    }
}

impl PageConfig {
    /// Create a new configuration with defaults (size 10, no cap).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size used for a requested size of `0`.
    ///
    /// A value of `0` here falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn with_default_size(mut self, size: u64) -> Self {
        self.default_size = if size == 0 { DEFAULT_PAGE_SIZE } else { size };
        self
    }

    /// Cap the page size.
    pub fn with_max_size(mut self, max: u64) -> Self {
        self.max_size = Some(max.max(1));
        self
    }

    fn resolve_size(&self, size: u64) -> u64 {
        let size = if size == 0 { self.default_size } else { size };
        match self.max_size {
            Some(max) => size.min(max),
            None => size,
        }
    }
}

/// A [`Query`] with 1-based page number, page size and row offset.
///
/// Every `Query` method is reachable through `Deref`/`DerefMut`.
///
/// ```
/// use gormqy::PageQuery;
///
/// let mut pq = PageQuery::new(2, 100);
/// pq.condition().eq("status", "active").end();
/// pq.desc("id");
///
/// assert_eq!((pq.page(), pq.size(), pq.offset()), (2, 100, 100));
/// assert_eq!(pq.where_sql(), "status = ?");
/// assert_eq!(pq.order(), "id DESC");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    query: Query,
    page: u64,
    size: u64,
    offset: u64,
}

impl PageQuery {
    /// Page `0` becomes `1`, size `0` becomes `10`.
    pub fn new(page: u64, size: u64) -> Self {
        Self::with_config(page, size, &PageConfig::default())
    }

    /// Like [`PageQuery::new`] with a custom default/maximum size.
    pub fn with_config(page: u64, size: u64, config: &PageConfig) -> Self {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let size = config.resolve_size(size);
        Self {
            query: Query::new(),
            page,
            size,
            offset: (page - 1).saturating_mul(size),
        }
    }

    /// Attach pagination to an existing query.
    pub fn from_query(query: Query, page: u64, size: u64) -> Self {
        Self {
            query,
            ..Self::new(page, size)
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Rows to skip: `(page - 1) * size`.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn into_query(self) -> Query {
        self.query
    }
}

impl Deref for PageQuery {
    type Target = Query;

    fn deref(&self) -> &Query {
        &self.query
    }
}

impl DerefMut for PageQuery {
    fn deref_mut(&mut self) -> &mut Query {
        &mut self.query
    }
}
