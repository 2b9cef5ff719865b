use crate::search::types::FilterCriteria;
use serde::{Deserialize, Serialize};

/// Which filter group a chip stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    Location,
    /// Both rent bounds together
    Price,
    PropertyTypes,
    Bedrooms,
    Amenities,
}

/// One removable filter chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub key: FilterKey,
    pub label: &'static str,
    pub value: String,
}

impl ActiveFilter {
    fn new(key: FilterKey, label: &'static str, value: String) -> Self {
        Self { key, label, value }
    }
}

/// Chips for every populated filter group, in display order.
///
/// The availability date has no chip; only `FilterCriteria::clear` resets it.
pub fn describe_active_filters(criteria: &FilterCriteria) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    if let Some(location) = criteria.location() {
        chips.push(ActiveFilter::new(
            FilterKey::Location,
            "Location",
            location.to_string(),
        ));
    }

    if criteria.min_rent.is_some() || criteria.max_rent.is_some() {
        let min = criteria
            .min_rent
            .map_or_else(|| "0".to_string(), |min| min.to_string());
        let max = criteria
            .max_rent
            .map_or_else(|| "∞".to_string(), |max| max.to_string());
        chips.push(ActiveFilter::new(
            FilterKey::Price,
            "Price",
            format!("₹{} - ₹{}", min, max),
        ));
    }

    if !criteria.property_types.is_empty() {
        let types: Vec<&str> = criteria.property_types.iter().map(String::as_str).collect();
        chips.push(ActiveFilter::new(
            FilterKey::PropertyTypes,
            "Type",
            types.join(", "),
        ));
    }

    if !criteria.bedroom_counts.is_empty() {
        let labels: Vec<String> = criteria
            .bedroom_counts
            .iter()
            .map(ToString::to_string)
            .collect();
        chips.push(ActiveFilter::new(
            FilterKey::Bedrooms,
            "BHK",
            format!("{} BHK", labels.join(", ")),
        ));
    }

    if !criteria.required_amenities.is_empty() {
        chips.push(ActiveFilter::new(
            FilterKey::Amenities,
            "Amenities",
            format!("{} selected", criteria.required_amenities.len()),
        ));
    }

    chips
}

impl FilterCriteria {
    /// Clear exactly the field(s) behind a chip
    pub fn remove(&mut self, key: FilterKey) {
        match key {
            FilterKey::Location => self.location_substring = None,
            FilterKey::Price => {
                self.min_rent = None;
                self.max_rent = None;
            }
            FilterKey::PropertyTypes => self.property_types.clear(),
            FilterKey::Bedrooms => self.bedroom_counts.clear(),
            FilterKey::Amenities => self.required_amenities.clear(),
        }
    }
}
