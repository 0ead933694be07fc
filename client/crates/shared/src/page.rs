//! Pagination Envelope
//!
//! The uniform wrapper every list-returning repository method produces,
//! regardless of what the backend actually sent. When the backend omits
//! pagination metadata, the repository synthesizes it from the request
//! parameters and the returned item count.

use serde::{Deserialize, Serialize};

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// 1-based page number
    pub page: u32,
    /// Requested page size
    pub limit: u32,
    /// Total matching items across all pages
    pub total: u64,
    /// Total page count
    pub pages: u32,
}

impl PageMeta {
    /// Synthesize metadata for a backend response that carried none
    ///
    /// `total` is taken from the returned item count, so it is only exact
    /// when the result fits on one page; that matches what the backend
    /// itself reports in the same situation. An empty result still counts
    /// as one page whenever the limit is positive.
    pub fn synthesized(page: u32, limit: u32, total: u64) -> Self {
        let pages = if limit == 0 {
            0
        } else {
            (total.div_ceil(u64::from(limit)) as u32).max(1)
        };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// A page of results plus its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, pagination: PageMeta) -> Self {
        Self { data, pagination }
    }

    /// Map the items, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_partial_page() {
        let meta = PageMeta::synthesized(1, 10, 7);
        assert_eq!(
            meta,
            PageMeta {
                page: 1,
                limit: 10,
                total: 7,
                pages: 1
            }
        );
    }

    #[test]
    fn test_synthesized_multiple_pages() {
        assert_eq!(PageMeta::synthesized(2, 10, 25).pages, 3);
        assert_eq!(PageMeta::synthesized(1, 10, 30).pages, 3);
    }

    #[test]
    fn test_synthesized_empty_result_is_one_page() {
        let meta = PageMeta::synthesized(1, 10, 0);
        assert_eq!(meta.total, 0);
        assert_eq!(meta.pages, 1);
    }

    #[test]
    fn test_synthesized_zero_limit() {
        assert_eq!(PageMeta::synthesized(1, 0, 5).pages, 0);
    }

    #[test]
    fn test_map_keeps_meta() {
        let page = Page::new(vec![1, 2, 3], PageMeta::synthesized(1, 10, 3));
        let mapped = page.map(|n| n * 2);
        assert_eq!(mapped.data, vec![2, 4, 6]);
        assert_eq!(mapped.pagination.total, 3);
    }
}
