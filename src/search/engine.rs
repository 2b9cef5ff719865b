use crate::models::{ListingId, ListingRecord};
use crate::search::types::{FilterCriteria, SortKey};
use std::cmp::Reverse;
use tracing::{debug, trace};

/// Filtered and ordered view over a borrowed listing collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult<'a> {
    listings: Vec<&'a ListingRecord>,
}

impl<'a> QueryResult<'a> {
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ListingRecord> + '_ {
        self.listings.iter().copied()
    }

    pub fn ids(&self) -> Vec<ListingId> {
        self.listings.iter().map(|listing| listing.id).collect()
    }

    pub fn as_slice(&self) -> &[&'a ListingRecord] {
        &self.listings
    }

    pub fn to_owned_records(&self) -> Vec<ListingRecord> {
        self.listings.iter().map(|&listing| listing.clone()).collect()
    }
}

impl<'a> IntoIterator for QueryResult<'a> {
    type Item = &'a ListingRecord;
    type IntoIter = std::vec::IntoIter<&'a ListingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.into_iter()
    }
}

/// Run the search pipeline: free text, then each facet filter, then sort.
///
/// Never fails. Every sort is stable, so ties keep their input order.
pub fn evaluate<'a>(
    records: &'a [ListingRecord],
    free_text_query: &str,
    criteria: &FilterCriteria,
    sort_key: SortKey,
) -> QueryResult<'a> {
    let mut listings: Vec<&ListingRecord> = records.iter().collect();

    if !free_text_query.is_empty() {
        let needle = free_text_query.to_lowercase();
        listings.retain(|listing| matches_free_text(listing, &needle));
        trace!(remaining = listings.len(), "free text stage");
    }

    if let Some(location) = criteria.location() {
        let needle = location.to_lowercase();
        listings.retain(|listing| listing.location.to_lowercase().contains(&needle));
        trace!(remaining = listings.len(), "location stage");
    }

    if criteria.min_rent.is_some() || criteria.max_rent.is_some() {
        listings.retain(|listing| within_rent(listing, criteria.min_rent, criteria.max_rent));
        trace!(remaining = listings.len(), "price stage");
    }

    if !criteria.property_types.is_empty() {
        listings.retain(|listing| {
            let property_type = listing.property_type.to_lowercase();
            criteria
                .property_types
                .iter()
                .any(|accepted| accepted.to_lowercase() == property_type)
        });
        trace!(remaining = listings.len(), "property type stage");
    }

    if !criteria.bedroom_counts.is_empty() {
        listings.retain(|listing| {
            criteria
                .bedroom_counts
                .iter()
                .any(|label| label.matches(listing.bedroom_count))
        });
        trace!(remaining = listings.len(), "bedroom stage");
    }

    if !criteria.required_amenities.is_empty() {
        listings.retain(|listing| criteria.required_amenities.is_subset(&listing.amenities));
        trace!(remaining = listings.len(), "amenities stage");
    }

    if let Some(available_by) = criteria.available_by {
        listings.retain(|listing| listing.available_from <= available_by);
        trace!(remaining = listings.len(), "availability stage");
    }

    match sort_key {
        SortKey::Relevance => {}
        SortKey::RentAscending => listings.sort_by_key(|listing| listing.rent_amount),
        SortKey::RentDescending => listings.sort_by_key(|listing| Reverse(listing.rent_amount)),
        SortKey::NewestFirst => listings.sort_by_key(|listing| Reverse(listing.posted_date)),
        SortKey::Distance => listings.sort_by_key(|listing| listing.id),
    }

    debug!(
        total = records.len(),
        matched = listings.len(),
        sort = %sort_key,
        "evaluated listing query"
    );

    QueryResult { listings }
}

/// Other listings to show next to `current`, in input order
pub fn similar_listings(
    records: &[ListingRecord],
    current: ListingId,
    limit: usize,
) -> Vec<&ListingRecord> {
    records
        .iter()
        .filter(|listing| listing.id != current)
        .take(limit)
        .collect()
}

/// `needle` must already be lower-cased
fn matches_free_text(listing: &ListingRecord, needle: &str) -> bool {
    listing.title.to_lowercase().contains(needle)
        || listing.location.to_lowercase().contains(needle)
        || listing.property_type.to_lowercase().contains(needle)
}

/// Negative or inverted bounds can never be satisfied.
fn within_rent(listing: &ListingRecord, min_rent: Option<i64>, max_rent: Option<i64>) -> bool {
    if min_rent.is_some_and(|min| min < 0) || max_rent.is_some_and(|max| max < 0) {
        return false;
    }
    let rent = i128::from(listing.rent_amount);
    min_rent.map_or(true, |min| rent >= i128::from(min))
        && max_rent.map_or(true, |max| rent <= i128::from(max))
}
