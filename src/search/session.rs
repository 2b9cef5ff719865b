use crate::models::{ListingId, ListingRecord};
use crate::search::chips::{describe_active_filters, ActiveFilter, FilterKey};
use crate::search::engine::{evaluate, similar_listings, QueryResult};
use crate::search::traits::{ensure_unique_ids, ListingSource};
use crate::search::types::{FilterCriteria, SortKey};
use anyhow::Result;
use tracing::{debug, info};

/// Areas suggested when a search comes back empty
pub const POPULAR_AREAS: [&str; 5] = [
    "Bandra West, Mumbai",
    "Koramangala, Bangalore",
    "Gurgaon Sector 29",
    "Powai, Mumbai",
    "Indiranagar, Bangalore",
];

/// Listings shown next to a listing's details
pub const SIMILAR_LIMIT: usize = 6;

/// Search state for one user session.
///
/// Owns what the search screen mutates (query, filters, sort, bookmarks) and
/// hands borrowed records to [`evaluate`] on every call to [`results`].
///
/// [`results`]: SearchSession::results
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    records: Vec<ListingRecord>,
    query: String,
    criteria: FilterCriteria,
    sort: SortKey,
}

impl SearchSession {
    pub fn new(records: Vec<ListingRecord>) -> Result<Self> {
        ensure_unique_ids(&records)?;
        Ok(Self {
            records,
            ..Self::default()
        })
    }

    /// Load the collection once from `source`
    pub async fn load(source: &dyn ListingSource) -> Result<Self> {
        info!("Loading listings from {}", source.source_name());
        let records = source.load().await?;
        Self::new(records)
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(query = %self.query, "search query changed");
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        debug!(sort = %sort, "sort changed");
    }

    /// Drop one chip's filter
    pub fn remove_filter(&mut self, key: FilterKey) {
        self.criteria.remove(key);
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    /// Flip the bookmark on a listing; returns the new state, or `None` for
    /// an unknown id
    pub fn toggle_bookmark(&mut self, id: ListingId) -> Option<bool> {
        let record = self.records.iter_mut().find(|record| record.id == id)?;
        record.bookmarked = !record.bookmarked;
        Some(record.bookmarked)
    }

    pub fn bookmarked(&self) -> impl Iterator<Item = &ListingRecord> {
        self.records.iter().filter(|record| record.bookmarked)
    }

    pub fn results(&self) -> QueryResult<'_> {
        evaluate(&self.records, &self.query, &self.criteria, self.sort)
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        describe_active_filters(&self.criteria)
    }

    /// Widen an empty search: search for `area` if given, otherwise drop
    /// every filter and the query
    pub fn broader_search(&mut self, area: Option<&str>) {
        match area {
            Some(area) => self.set_query(area),
            None => {
                self.clear_filters();
                self.query.clear();
            }
        }
    }

    pub fn popular_areas(&self) -> &'static [&'static str] {
        &POPULAR_AREAS
    }

    pub fn similar_to(&self, id: ListingId) -> Vec<&ListingRecord> {
        similar_listings(&self.records, id, SIMILAR_LIMIT)
    }
}
