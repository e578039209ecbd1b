mod fetch;
mod modal;
mod sessions;
mod store;

pub use fetch::{lock_state, run_fetch, FetchOutcome, FetchTrigger};
pub use modal::ModalState;
pub use sessions::{session_cookie, set_cookie_value, Session, Sessions, SESSION_COOKIE};
pub use store::ListingStore;

use crate::domain::FilterForm;

/// Everything one open page remembers between user interactions.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    pub store: ListingStore,
    pub modal: ModalState,
    /// Filters of the most recent apply/clear; page navigation reuses them.
    pub filters: FilterForm,
    latest_token: u64,
}
