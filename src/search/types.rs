use crate::error::SearchError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Bedroom facet option. `FiveOrMore` is the "5+" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BedroomLabel {
    Exact(u32),
    FiveOrMore,
}

impl BedroomLabel {
    pub fn matches(&self, bedroom_count: u32) -> bool {
        match self {
            BedroomLabel::Exact(n) => *n == bedroom_count,
            BedroomLabel::FiveOrMore => bedroom_count >= 5,
        }
    }
}

impl fmt::Display for BedroomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedroomLabel::Exact(n) => write!(f, "{}", n),
            BedroomLabel::FiveOrMore => write!(f, "5+"),
        }
    }
}

impl FromStr for BedroomLabel {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "5+" {
            return Ok(BedroomLabel::FiveOrMore);
        }
        s.parse::<u32>()
            .map(BedroomLabel::Exact)
            .map_err(|_| SearchError::InvalidBedroomLabel(s.to_string()))
    }
}

impl TryFrom<String> for BedroomLabel {
    type Error = SearchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BedroomLabel> for String {
    fn from(value: BedroomLabel) -> Self {
        value.to_string()
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Input order
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
    #[serde(rename = "price-low")]
    RentAscending,
    #[serde(rename = "price-high")]
    RentDescending,
    #[serde(rename = "newest")]
    NewestFirst,
    /// No coordinates exist per listing, so this orders by id.
    #[serde(rename = "distance")]
    Distance,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::RentAscending,
        SortKey::RentDescending,
        SortKey::NewestFirst,
        SortKey::Distance,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::RentAscending => "price-low",
            SortKey::RentDescending => "price-high",
            SortKey::NewestFirst => "newest",
            SortKey::Distance => "distance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Most Relevant",
            SortKey::RentAscending => "Price: Low to High",
            SortKey::RentDescending => "Price: High to Low",
            SortKey::NewestFirst => "Newest Listings",
            SortKey::Distance => "Distance",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SortKey {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::UnknownSortKey(s.to_string()))
    }
}

/// Facet filters selected by the user. Every field is "no constraint" when
/// empty or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the listing location
    pub location_substring: Option<String>,
    /// Inclusive lower rent bound
    pub min_rent: Option<i64>,
    /// Inclusive upper rent bound
    pub max_rent: Option<i64>,
    /// Accepted property types, compared case-insensitively
    pub property_types: BTreeSet<String>,
    pub bedroom_counts: BTreeSet<BedroomLabel>,
    /// Every label must be present on the listing
    pub required_amenities: BTreeSet<String>,
    /// Listing must be available on or before this date
    pub available_by: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location_substring: Some(location.into()),
            ..self
        }
    }

    pub fn with_min_rent(self, min_rent: i64) -> Self {
        Self {
            min_rent: Some(min_rent),
            ..self
        }
    }

    pub fn with_max_rent(self, max_rent: i64) -> Self {
        Self {
            max_rent: Some(max_rent),
            ..self
        }
    }

    pub fn with_rent_range(self, min_rent: i64, max_rent: i64) -> Self {
        self.with_min_rent(min_rent).with_max_rent(max_rent)
    }

    pub fn with_property_type(mut self, property_type: &str) -> Self {
        self.property_types.insert(property_type.to_lowercase());
        self
    }

    pub fn with_bedrooms(mut self, label: BedroomLabel) -> Self {
        self.bedroom_counts.insert(label);
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.required_amenities.insert(amenity.into());
        self
    }

    pub fn with_available_by(self, date: NaiveDate) -> Self {
        Self {
            available_by: Some(date),
            ..self
        }
    }

    /// Location filter, ignoring an empty string
    pub fn location(&self) -> Option<&str> {
        self.location_substring
            .as_deref()
            .filter(|location| !location.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.location().is_none()
            && self.min_rent.is_none()
            && self.max_rent.is_none()
            && self.property_types.is_empty()
            && self.bedroom_counts.is_empty()
            && self.required_amenities.is_empty()
            && self.available_by.is_none()
    }

    /// Reset every field, including the availability date
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
