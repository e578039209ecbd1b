// src/domain/filters.rs

use crate::config::MAX_DISTANCE_KM;
use std::collections::HashMap;

pub const DEFAULT_SORT: &str = "price-asc";

/// Options of the combined sort selector: (value, label).
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("price-asc", "Precio: menor a mayor"),
    ("price-desc", "Precio: mayor a menor"),
    ("distance-asc", "Distancia: mas cerca"),
    ("distance-desc", "Distancia: mas lejos"),
    ("date-desc", "Mas recientes"),
    ("date-asc", "Mas antiguos"),
];

/// Raw values of the filter form, exactly as the inputs hold them.
///
/// Every field is kept as text: this layer does syntax only, and whatever the user
/// typed (including `min > max`) is forwarded to the API as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterForm {
    pub property_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_rooms: Option<String>,
    pub max_rooms: Option<String>,
    pub min_bathrooms: Option<String>,
    pub max_bathrooms: Option<String>,
    pub max_distance: Option<String>,
    /// Combined selector value, e.g. `price-asc`.
    pub sort: String,
}

impl Default for FilterForm {
    /// The state "clear filters" resets the form to.
    fn default() -> Self {
        Self {
            property_type: None,
            min_price: None,
            max_price: None,
            min_rooms: None,
            max_rooms: None,
            min_bathrooms: None,
            max_bathrooms: None,
            max_distance: Some(format!("{MAX_DISTANCE_KM}")),
            sort: DEFAULT_SORT.to_string(),
        }
    }
}

impl FilterForm {
    /// Read the form fields out of submitted request parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let field = |name: &str| params.get(name).cloned();

        Self {
            property_type: field("property_type"),
            min_price: field("min_price"),
            max_price: field("max_price"),
            min_rooms: field("min_rooms"),
            max_rooms: field("max_rooms"),
            min_bathrooms: field("min_bathrooms"),
            max_bathrooms: field("max_bathrooms"),
            max_distance: field("max_distance"),
            sort: field("sort")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SORT.to_string()),
        }
    }

    /// Split the combined selector into `(sort_by, sort_order)`.
    /// A value without a separator sorts ascending.
    pub fn sort_parts(&self) -> (&str, &str) {
        self.sort.split_once('-').unwrap_or((self.sort.as_str(), "asc"))
    }

    /// Slider value as shown next to the distance input.
    pub fn distance_label(&self) -> String {
        let value = self
            .max_distance
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{MAX_DISTANCE_KM}"));
        format!("{value} km")
    }

    /// Serialize the form into its canonical API query.
    pub fn serialize(&self) -> FilterQuery {
        let mut query = FilterQuery::default();

        let fields = [
            ("property_type", &self.property_type),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
            ("min_rooms", &self.min_rooms),
            ("max_rooms", &self.max_rooms),
            ("min_bathrooms", &self.min_bathrooms),
            ("max_bathrooms", &self.max_bathrooms),
        ];
        for (key, value) in fields {
            if let Some(v) = non_empty(value) {
                query.push(key, v);
            }
        }

        if let Some(v) = non_empty(&self.max_distance) {
            // Unparseable or at/above the ceiling means unconstrained.
            if v.parse::<f64>().is_ok_and(|km| km < MAX_DISTANCE_KM) {
                query.push("max_distance", v);
            }
        }

        let (sort_by, sort_order) = self.sort_parts();
        query.push("sort_by", sort_by);
        query.push("sort_order", sort_order);

        query
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Ordered query-key to value mapping produced by [`FilterForm::serialize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery(Vec<(&'static str, String)>);

impl FilterQuery {
    fn push(&mut self, key: &'static str, value: &str) {
        self.0.push((key, value.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
