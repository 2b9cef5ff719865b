//! Client-side rental listing search: free-text and facet filtering,
//! stable sorting and active-filter chips over an in-memory collection.

pub mod config;
pub mod error;
pub mod models;
pub mod search;

pub use error::SearchError;
pub use models::{ListingId, ListingRecord, Owner};
pub use search::{
    describe_active_filters, evaluate, ActiveFilter, BedroomLabel, FilterCriteria, FilterKey,
    ListingSource, QueryResult, SearchSession, SortKey,
};
