mod api_error;
mod client;
mod models;

pub use api_error::ApiError;
pub use client::{HttpListingsApi, ListingsApi, ListingsQuery};
pub use models::{Listing, ListingLocation, ListingsPage, PropertyType, TypeAttributes};
