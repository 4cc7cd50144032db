//! Page slicing for list and search results.

use serde::{Deserialize, Serialize};

/// Page number used when the query omits it or it cannot be parsed.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the query omits it, it cannot be parsed, or it is below 1.
pub const DEFAULT_LIMIT: i64 = 10;

/// Normalized pagination parameters. `page` and `limit` are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl PageRequest {
    /// Build a request, clamping `page < 1` to 1 and `limit < 1` to [`DEFAULT_LIMIT`].
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: if page < 1 { DEFAULT_PAGE } else { page },
            limit: if limit < 1 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Build a request from raw query-string values.
    ///
    /// Missing or non-numeric values fall back to the defaults before the
    /// usual clamping is applied.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |raw: Option<&str>, default: i64| {
            raw.and_then(|s| s.trim().parse::<i64>().ok())
                .unwrap_or(default)
        };
        Self::new(parse(page, DEFAULT_PAGE), parse(limit, DEFAULT_LIMIT))
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Half-open `[start, end)` range of this page within a sequence of `len` items.
    ///
    /// Returns `None` when the page starts past the end of the sequence.
    fn bounds(&self, len: usize) -> Option<(usize, usize)> {
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let skipped_pages = usize::try_from(self.page - 1).unwrap_or(usize::MAX);
        let start = skipped_pages.saturating_mul(limit);
        if start > len {
            return None;
        }
        Some((start, start.saturating_add(limit).min(len)))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub limit: i64,
    /// Length of the full, unsliced sequence.
    pub count: usize,
}

/// Slice `items` into the page described by `request`.
///
/// Out-of-range pages are not an error: they produce an empty `items` with the
/// normalized parameters echoed back.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let count = items.len();
    let items = match request.bounds(count) {
        Some((start, end)) => items.into_iter().skip(start).take(end - start).collect(),
        None => Vec::new(),
    };

    Page {
        items,
        page: request.page(),
        limit: request.limit(),
        count,
    }
}
