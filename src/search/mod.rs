pub mod chips;
pub mod engine;
pub mod file;
pub mod mock;
pub mod session;
pub mod traits;
pub mod types;

pub use chips::{describe_active_filters, ActiveFilter, FilterKey};
pub use engine::{evaluate, similar_listings, QueryResult};
pub use file::JsonFileListingSource;
pub use mock::MockListingSource;
pub use session::SearchSession;
pub use traits::ListingSource;
pub use types::{BedroomLabel, FilterCriteria, SortKey};
