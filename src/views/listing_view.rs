// src/views/listing_view.rs

use crate::api::Listing;
use crate::domain::listing::TypeBadge;
use crate::domain::SafeText;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=Sin+imagen";
pub const CARD_IMAGE_ERROR: &str = "https://via.placeholder.com/400x300?text=Error";
pub const DETAIL_IMAGE_ERROR: &str = "https://via.placeholder.com/800x400?text=Error";

/// A number with its unit, ready for display ("3 hab", "85m2").
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub value: String,
    /// Short unit used on cards.
    pub unit: &'static str,
    /// Caption used in the detail grid.
    pub caption: &'static str,
}

/// Everything a listing card shows. All listing text is escaped on construction.
#[derive(Debug, Clone)]
pub struct ListingCardVm {
    pub index: usize,
    pub title: SafeText,
    pub image: SafeText,
    pub badge: TypeBadge,
    /// `Some` only when there is more than one image.
    pub image_count: Option<usize>,
    pub price: String,
    pub reserved: bool,
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone)]
pub struct ListingDetailVm {
    pub index: usize,
    pub title: SafeText,
    pub badge: TypeBadge,
    pub images: Vec<SafeText>,
    pub price: String,
    pub reserved: bool,
    pub facts: Vec<Fact>,
    pub description: Option<SafeText>,
    /// "City" or "City, postal code"; only present when a city is known.
    pub location: Option<SafeText>,
    pub updated_on: Option<String>,
    /// `None` renders a disabled link.
    pub item_url: Option<SafeText>,
}

/// Whole numbers print without a fractional part, like `650` rather than `650.0`.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

fn facts(listing: &Listing) -> Vec<Fact> {
    [
        (listing.rooms(), "hab", "Habitaciones"),
        (listing.bathrooms(), "banos", "Banos"),
        (listing.surface(), "m2", "m2"),
        (listing.distance(), "km", "km"),
    ]
    .into_iter()
    .filter_map(|(value, unit, caption)| {
        value.map(|v| Fact {
            value: format_number(v),
            unit,
            caption,
        })
    })
    .collect()
}

/// Every image URL of the listing, escaped, in display order.
pub fn escaped_images(listing: &Listing) -> Vec<SafeText> {
    listing.images.iter().map(|src| SafeText::escape(src)).collect()
}

fn price(listing: &Listing) -> String {
    listing.price.map(format_number).unwrap_or_default()
}

impl ListingCardVm {
    pub fn new(index: usize, listing: &Listing) -> Self {
        let image = listing
            .images
            .first()
            .map(|src| SafeText::escape(src))
            .unwrap_or_else(|| SafeText::escape(PLACEHOLDER_IMAGE));

        Self {
            index,
            title: SafeText::escape_opt(listing.title.as_deref()),
            image,
            badge: listing.property_type.badge(),
            image_count: (listing.images.len() > 1).then_some(listing.images.len()),
            price: price(listing),
            reserved: listing.reserved,
            facts: facts(listing),
        }
    }
}

impl ListingDetailVm {
    pub fn new(index: usize, listing: &Listing, marketplace_url: &str) -> Self {
        let location = listing.city().map(|city| match listing.postal_code() {
            Some(postal) => SafeText::escape(&format!("{city}, {postal}")),
            None => SafeText::escape(city),
        });

        Self {
            index,
            title: SafeText::escape_opt(listing.title.as_deref()),
            badge: listing.property_type.badge(),
            images: escaped_images(listing),
            price: price(listing),
            reserved: listing.reserved,
            facts: facts(listing),
            description: listing.description_text().map(SafeText::escape),
            location,
            updated_on: listing.modified_on().map(|d| d.format("%d/%m/%Y").to_string()),
            item_url: listing
                .item_url(marketplace_url)
                .map(|url| SafeText::escape(&url)),
        }
    }
}
