use crate::entry::RankedEntry;
use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_LIMIT: usize = 100;

/// Requested window; `None` falls back to the defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

/// A bounded window over a ranked sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T = RankedEntry> {
    pub items: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

impl<T> Page<T> {
    /// Convert the items while keeping the window metadata
    pub fn map_items<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }

    /// Number of pages needed to cover `total` at this page's limit
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.limit.max(1))
    }
}

/// Slice a ranked sequence into one page
///
/// Never fails: page 0 is read as page 1, limit is clamped to `1..=MAX_LIMIT`
/// and a page past the end yields no items. `total` is always the full length.
pub fn paginate<T>(ranked: Vec<T>, page: Option<usize>, limit: Option<usize>) -> Page<T> {
    let page = page.unwrap_or(DEFAULT_PAGE).max(1);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let total = ranked.len();
    let offset = (page - 1).saturating_mul(limit);

    let items = if offset >= total {
        Vec::new()
    } else {
        ranked.into_iter().skip(offset).take(limit).collect()
    };

    Page {
        items,
        page,
        limit,
        total,
    }
}
