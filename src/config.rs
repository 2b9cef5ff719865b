use crate::search::SortKey;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const LISTINGS_VAR: &str = "RENTAL_SEARCH_LISTINGS";
pub const SORT_VAR: &str = "RENTAL_SEARCH_SORT";

/// Runtime settings for the search binary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// JSON listings file; the built-in sample listings are used when unset
    pub listings_path: Option<PathBuf>,
    /// Sort applied when none is given on the command line
    pub default_sort: SortKey,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let listings_path = get(LISTINGS_VAR).map(PathBuf::from);
        let default_sort = match get(SORT_VAR) {
            Some(value) => value
                .parse::<SortKey>()
                .with_context(|| format!("Invalid {}", SORT_VAR))?,
            None => SortKey::default(),
        };

        Ok(Self {
            listings_path,
            default_sort,
        })
    }
}
