use crate::error::SearchError;
use crate::models::ListingRecord;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// Common trait for everything that supplies the listing collection
/// (bundled fixture, JSON export, a real data service later on)
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load the full collection once per session
    async fn load(&self) -> Result<Vec<ListingRecord>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}

/// Ids must be unique within one collection
pub fn ensure_unique_ids(records: &[ListingRecord]) -> Result<(), SearchError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(SearchError::DuplicateId(record.id));
        }
    }
    Ok(())
}
