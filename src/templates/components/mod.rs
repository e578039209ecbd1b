pub mod card;
pub mod carousel;
pub mod error;
pub mod filter_form;
pub mod modal;
pub mod pagination;
pub mod results;

pub use card::listing_card;
pub use carousel::carousel;
pub use error::{html_error_response, listings_error};
pub use filter_form::filter_form;
pub use modal::{listing_modal, modal_root};
pub use pagination::pagination;
pub use results::{results, ResultsView};
