// src/domain/listing.rs

use crate::api::{Listing, PropertyType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use url::Url;

/// A number counts as present only if it exists and is finite. Zero is a real value.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// The value from `type_attributes` wins whenever it is present; the top-level
/// field is only consulted when the nested one is missing.
fn nested_or(nested: Option<f64>, fallback: Option<f64>) -> Option<f64> {
    present(nested).or_else(|| present(fallback))
}

impl Listing {
    pub fn rooms(&self) -> Option<f64> {
        nested_or(self.type_attributes.as_ref().and_then(|a| a.rooms), self.rooms)
    }

    pub fn bathrooms(&self) -> Option<f64> {
        nested_or(
            self.type_attributes.as_ref().and_then(|a| a.bathrooms),
            self.bathrooms,
        )
    }

    pub fn surface(&self) -> Option<f64> {
        nested_or(
            self.type_attributes.as_ref().and_then(|a| a.surface),
            self.square_meters,
        )
    }

    pub fn distance(&self) -> Option<f64> {
        present(self.distance_km)
    }

    pub fn city(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.city.as_deref())
            .filter(|c| !c.is_empty())
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.postal_code.as_deref())
            .filter(|p| !p.is_empty())
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Outbound marketplace link, `{marketplace}/item/{web_slug}`.
    pub fn item_url(&self, marketplace: &str) -> Option<String> {
        let slug = self.web_slug.as_deref().filter(|s| !s.is_empty())?;
        let mut url = Url::parse(marketplace).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("item")
            .push(slug);
        Some(url.to_string())
    }

    /// Date part of `modified_at`, accepting naive ISO timestamps and RFC 3339.
    pub fn modified_on(&self) -> Option<NaiveDate> {
        let raw = self.modified_at.as_deref()?;
        raw.parse::<NaiveDateTime>()
            .map(|dt| dt.date())
            .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
            .ok()
    }
}

/// Visual treatment of a property type: label and badge colour classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBadge {
    pub label: &'static str,
    pub classes: &'static str,
}

impl PropertyType {
    /// Anything that is not an apartment gets the house treatment.
    pub fn badge(self) -> TypeBadge {
        match self {
            PropertyType::Apartment => TypeBadge {
                label: "Piso",
                classes: "bg-blue-100 text-blue-800",
            },
            PropertyType::House | PropertyType::Unknown => TypeBadge {
                label: "Casa",
                classes: "bg-green-100 text-green-800",
            },
        }
    }
}
