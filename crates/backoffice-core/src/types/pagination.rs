//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
///
/// Pages are 1-based on this side; the backend counts from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// The 0-based page index sent as the `page` query parameter.
    pub fn backend_page(&self) -> u64 {
        self.page.saturating_sub(1)
    }

    /// Row number (1-based) of the first item on this page.
    pub fn first_row_number(&self) -> u64 {
        self.backend_page() * self.page_size + 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a backend listing (`data.content` / `data.totalElements`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Create a page.
    pub fn new(content: Vec<T>, total_elements: u64) -> Self {
        Self {
            content,
            total_elements,
        }
    }

    /// Total number of pages for the given page size (at least 1).
    pub fn total_pages(&self, page_size: u64) -> u64 {
        if self.total_elements == 0 || page_size == 0 {
            1
        } else {
            self.total_elements.div_ceil(page_size)
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
