use crate::models::ListingRecord;
use crate::search::traits::{ensure_unique_ids, ListingSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Listings exported as a JSON array of records
#[derive(Debug, Clone)]
pub struct JsonFileListingSource {
    path: PathBuf,
}

impl JsonFileListingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListingSource for JsonFileListingSource {
    async fn load(&self) -> Result<Vec<ListingRecord>> {
        debug!("Reading listings from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read listings file {}", self.path.display()))?;

        let listings: Vec<ListingRecord> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse listings file {}", self.path.display()))?;

        ensure_unique_ids(&listings)
            .with_context(|| format!("Invalid listings file {}", self.path.display()))?;

        info!("💾 Loaded {} listings from {}", listings.len(), self.path.display());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
