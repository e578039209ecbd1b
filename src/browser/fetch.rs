// src/browser/fetch.rs
use crate::api::{ApiError, ListingsApi, ListingsPage, ListingsQuery};
use crate::browser::{BrowserState, ListingStore};
use crate::config::PAGE_SIZE;
use crate::domain::pagination::is_navigable;
use crate::domain::FilterForm;
use crate::errors::ServerError;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

/// What asked for a new page of results.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchTrigger {
    /// First page load: page 1 with default filters.
    Initial,
    /// Filters submitted: page 1 with the submitted form.
    ApplyFilters(FilterForm),
    /// Every field back to its default, page 1.
    ClearFilters,
    /// Same filters, another page.
    GoToPage(u32),
}

/// An issued request. Only the ticket with the latest token may write the store.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub token: u64,
    pub query: ListingsQuery,
}

#[derive(Debug)]
pub enum FetchOutcome {
    /// The store now holds the fetched page.
    Applied,
    /// The latest request failed; the store is untouched.
    Failed(ApiError),
    /// A newer request was issued while this one was in flight; result dropped.
    Stale,
}

impl BrowserState {
    /// Decide the next request for `trigger`, or `None` when it is a no-op
    /// (navigation to a page outside `1..=total_pages`).
    pub fn begin_fetch(&mut self, trigger: FetchTrigger) -> Option<FetchTicket> {
        let page = match trigger {
            FetchTrigger::Initial | FetchTrigger::ClearFilters => {
                self.filters = FilterForm::default();
                1
            }
            FetchTrigger::ApplyFilters(form) => {
                self.filters = form;
                1
            }
            FetchTrigger::GoToPage(page) => {
                if !is_navigable(page, self.store.total_pages) {
                    tracing::debug!(page, total = self.store.total_pages, "ignoring page request");
                    return None;
                }
                page
            }
        };

        self.latest_token += 1;

        Some(FetchTicket {
            token: self.latest_token,
            query: ListingsQuery {
                filters: self.filters.serialize(),
                page,
                page_size: PAGE_SIZE,
            },
        })
    }

    /// Apply a finished request if it is still the latest one.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ListingsPage, ApiError>,
    ) -> FetchOutcome {
        if ticket.token != self.latest_token {
            tracing::debug!(
                token = ticket.token,
                latest = self.latest_token,
                "discarding stale listings response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.store = ListingStore::from_page(page, ticket.query.page);
                // The open index pointed into the page that was just replaced.
                self.modal.close();
                FetchOutcome::Applied
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

pub fn lock_state(state: &Mutex<BrowserState>) -> Result<MutexGuard<'_, BrowserState>, ServerError> {
    state.lock().map_err(|_| {
        tracing::error!("browser state lock poisoned");
        ServerError::InternalError
    })
}

/// Run one fetch cycle and render from the resulting state.
///
/// The lock is released while the API call is in flight, then taken again to apply
/// the result and render in one step. Returns `Ok(None)` when the trigger was a no-op.
pub fn run_fetch<T, F>(
    state: &Mutex<BrowserState>,
    api: &dyn ListingsApi,
    trigger: FetchTrigger,
    render: F,
) -> Result<Option<T>, ServerError>
where
    F: FnOnce(&BrowserState, &FetchOutcome) -> T,
{
    let ticket = match lock_state(state)?.begin_fetch(trigger) {
        Some(ticket) => ticket,
        None => return Ok(None),
    };

    tracing::info!(
        token = ticket.token,
        page = ticket.query.page,
        query = %ticket.query.to_query_string(),
        "fetching listings"
    );
    let start = Instant::now();
    let result = api.fetch_listings(&ticket.query);

    match &result {
        Ok(page) => tracing::info!(
            token = ticket.token,
            listings = page.listings.len(),
            total = page.total,
            elapsed = ?start.elapsed(),
            "listings fetched"
        ),
        Err(e) => tracing::warn!(
            token = ticket.token,
            elapsed = ?start.elapsed(),
            error = %e,
            "listings fetch failed"
        ),
    }

    let mut guard = lock_state(state)?;
    let outcome = guard.complete_fetch(ticket, result);
    Ok(Some(render(&guard, &outcome)))
}
