//! Table and form logic behind the management screens.

pub mod accounts;
pub mod products;
pub mod rows;

pub use accounts::AccountTable;
pub use products::ProductTable;
pub use rows::{AccountRow, ProductRow};

use backoffice_core::types::{Page, PageRequest};

/// Rows of one page plus the pagination state they were fetched with.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    data: Page<T>,
    page: PageRequest,
}

impl<T> TableView<T> {
    pub fn new(page_size: u64) -> Self {
        Self {
            data: Page::default(),
            page: PageRequest::new(1, page_size),
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.data.content
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn total(&self) -> u64 {
        self.data.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.data.total_pages(self.page.page_size)
    }

    fn replace(&mut self, page: PageRequest, data: Page<T>) {
        self.page = page;
        self.data = data;
    }

    fn rows_mut(&mut self) -> &mut Vec<T> {
        &mut self.data.content
    }

    fn forget_one(&mut self) {
        self.data.total_elements = self.data.total_elements.saturating_sub(1);
    }
}
