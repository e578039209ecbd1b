pub mod listing_view;

pub use listing_view::{format_number, Fact, ListingCardVm, ListingDetailVm};
