pub mod carousel;
pub mod escape;
pub mod filters;
pub mod listing;
pub mod pagination;

pub use carousel::Carousel;
pub use escape::SafeText;
pub use filters::{FilterForm, FilterQuery};
pub use pagination::PageLink;
