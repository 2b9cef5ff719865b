use thiserror::Error;

use crate::models::ListingId;

/// Errors raised while parsing user input or loading listings.
///
/// Evaluating a query never fails; these only surface at the edges.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("invalid bedroom label: {0}")]
    InvalidBedroomLabel(String),

    #[error("duplicate listing id: {0}")]
    DuplicateId(ListingId),
}
