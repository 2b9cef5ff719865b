use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Stable identifier of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u64);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact details of the listing owner
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub name: String,
    pub phone: String,
}

/// One rental property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: ListingId,
    pub title: String,
    pub location: String,
    /// Monthly rent
    pub rent_amount: u64,
    /// Lower-cased category, e.g. "apartment" or "villa"
    pub property_type: String,
    pub bedroom_count: u32,
    pub amenities: BTreeSet<String>,
    pub posted_date: NaiveDate,
    pub available_from: NaiveDate,
    #[serde(default)]
    pub bookmarked: bool,

    // Display-only fields, never consulted when filtering
    #[serde(default)]
    pub deposit: Option<u64>,
    #[serde(default)]
    pub bathroom_count: Option<u32>,
    #[serde(default)]
    pub area_sqft: Option<u32>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
}

impl ListingRecord {
    /// Minimal record; display fields start empty and `property_type` is
    /// stored lower-cased.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        location: impl Into<String>,
        rent_amount: u64,
        property_type: &str,
        bedroom_count: u32,
        posted_date: NaiveDate,
        available_from: NaiveDate,
    ) -> Self {
        Self {
            id: ListingId(id),
            title: title.into(),
            location: location.into(),
            rent_amount,
            property_type: property_type.to_lowercase(),
            bedroom_count,
            amenities: BTreeSet::new(),
            posted_date,
            available_from,
            bookmarked: false,
            deposit: None,
            bathroom_count: None,
            area_sqft: None,
            images: Vec::new(),
            owner: None,
        }
    }

    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.contains(amenity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_lowercases_property_type() {
        let record = ListingRecord::new(
            1,
            "Garden Villa",
            "Koramangala, Bangalore",
            65_000,
            "Villa",
            3,
            date(2025, 7, 12),
            date(2025, 7, 25),
        );
        assert_eq!(record.property_type, "villa");
        assert!(!record.bookmarked);
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let json = r#"{
            "id": 7,
            "title": "Sea View Flat",
            "location": "Worli, Mumbai",
            "rentAmount": 82000,
            "propertyType": "apartment",
            "bedroomCount": 2,
            "amenities": ["Lift", "Parking"],
            "postedDate": "2025-07-01",
            "availableFrom": "2025-08-01"
        }"#;
        let record: ListingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, ListingId(7));
        assert!(record.has_amenity("Lift"));
        assert!(!record.has_amenity("lift"));
        assert!(record.owner.is_none());
        assert!(record.images.is_empty());
    }
}
