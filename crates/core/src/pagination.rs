//! Offset pagination.
//!
//! Pages are 1-based: page `n` of size `s` covers rows `(n-1)*s .. n*s`.
//! The request only guards the lower bounds; any upper bound on the page
//! size is the caller's policy.

use crate::error::CoreError;

/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when configuration does not override it.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// A validated `(page, page_size)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Build a page request. Both values must be at least 1.
    pub fn new(page: i64, page_size: i64) -> Result<Self, CoreError> {
        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be at least 1, got {page}"
            )));
        }
        if page_size < 1 {
            return Err(CoreError::Validation(format!(
                "page size must be at least 1, got {page_size}"
            )));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// Number of rows per page (the SQL `LIMIT`).
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Rows skipped before this page (the SQL `OFFSET`).
    ///
    /// Saturates instead of overflowing for absurd page numbers; such an
    /// offset simply returns an empty page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let page = PageRequest::new(1, 20).unwrap();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn second_page_of_ten_starts_at_ten() {
        let page = PageRequest::new(2, 10).unwrap();
        assert_eq!(page.offset(), 10);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn zero_page_rejected() {
        assert_matches!(PageRequest::new(0, 10), Err(CoreError::Validation(_)));
    }

    #[test]
    fn zero_page_size_rejected() {
        assert_matches!(PageRequest::new(1, 0), Err(CoreError::Validation(_)));
    }

    #[test]
    fn negative_values_rejected() {
        assert_matches!(PageRequest::new(-3, 10), Err(CoreError::Validation(_)));
        assert_matches!(PageRequest::new(1, -1), Err(CoreError::Validation(_)));
    }

    #[test]
    fn huge_page_saturates() {
        let page = PageRequest::new(i64::MAX, 1000).unwrap();
        assert_eq!(page.offset(), i64::MAX);
    }
}
