//! Page-based pagination
//!
//! A [`PageSpec`] is always in range: `page >= 1` and `1 <= limit <= 100`.
//! Out-of-range input is clamped rather than rejected.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Requested slice of a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page: u32,
    limit: u32,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageSpec {
    /// Build a page spec from optional raw query values, clamping into range
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page
            .unwrap_or(DEFAULT_PAGE as i64)
            .clamp(1, u32::MAX as i64) as u32;
        let limit = limit
            .unwrap_or(DEFAULT_LIMIT as i64)
            .clamp(1, MAX_LIMIT as i64) as u32;
        Self { page, limit }
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items before this page: `(page - 1) * limit`
    #[inline]
    pub fn skip(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    /// SQL `OFFSET` value
    #[inline]
    pub fn offset(&self) -> i64 {
        self.skip().min(i64::MAX as u64) as i64
    }

    /// Slice an in-memory result set
    pub fn paginate<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len() as u64;
        let skip = self.skip().min(total) as usize;
        let items = items
            .into_iter()
            .skip(skip)
            .take(self.limit as usize)
            .collect();
        Page::new(items, self, total)
    }
}

/// Pagination metadata returned alongside a page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(spec: &PageSpec, total: u64) -> Self {
        Self {
            page: spec.page,
            limit: spec.limit,
            total,
            total_pages: total.div_ceil(spec.limit as u64),
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Wrap an already-sliced page (e.g. from a SQL `LIMIT/OFFSET` query)
    pub fn new(items: Vec<T>, spec: &PageSpec, total: u64) -> Self {
        Self {
            items,
            pagination: Pagination::new(spec, total),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
