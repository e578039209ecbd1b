// src/browser/store.rs
use crate::api::{Listing, ListingsPage};

/// The last successfully fetched page of results.
///
/// Only the fetch cycle writes here, and always by replacing the whole
/// snapshot, so a reader never sees listings from one page with the counts of another.
#[derive(Debug, Clone)]
pub struct ListingStore {
    pub listings: Vec<Listing>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl Default for ListingStore {
    fn default() -> Self {
        Self {
            listings: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total: 0,
        }
    }
}

impl ListingStore {
    pub fn from_page(page: ListingsPage, current_page: u32) -> Self {
        Self {
            listings: page.listings,
            current_page: current_page.max(1),
            total_pages: page.pages.max(1),
            total: page.total,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Listing> {
        self.listings.get(index)
    }
}
