use serde::Deserialize;

// listing
//  ├── web_slug
//  ├── property_type        ("apartment" | "house")
//  ├── title, description, price, reserved
//  ├── images[]
//  ├── location
//  │    ├── city
//  │    └── postal_code
//  ├── type_attributes
//  │    ├── rooms
//  │    ├── bathrooms
//  │    └── surface
//  ├── rooms, bathrooms, square_meters   (fallbacks)
//  ├── distance_km
//  └── modified_at

/// One page of results as returned by `GET /api/listings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingsPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    pub title: Option<String>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub property_type: PropertyType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    pub type_attributes: Option<TypeAttributes>,
    pub rooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub square_meters: Option<f64>,

    pub distance_km: Option<f64>,
    pub description: Option<String>,
    pub location: Option<ListingLocation>,
    pub web_slug: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub reserved: bool,
    pub modified_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeAttributes {
    pub rooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub surface: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingLocation {
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    /// Anything the API sends that is neither of the above, or nothing at all.
    #[default]
    #[serde(other)]
    Unknown,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
