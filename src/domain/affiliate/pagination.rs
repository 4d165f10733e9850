//! Page arithmetic for the paginated profile listing.

use serde::{Deserialize, Serialize};

/// A 1-indexed page request.
///
/// Values are not validated. A zero or negative page produces a zero or
/// negative start offset that is handed to the backing store as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_PAGE_SIZE: i64 = 10;

    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// Inclusive row range `(start, end)` covering this page.
    ///
    /// Arithmetic saturates at the `i64` bounds instead of overflowing.
    pub fn range(&self) -> (i64, i64) {
        let start = self.page.saturating_sub(1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).saturating_sub(1);
        (start, end)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_PAGE_SIZE)
    }
}
