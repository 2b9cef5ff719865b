use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use rental_search::config::Config;
use rental_search::search::{
    BedroomLabel, FilterCriteria, JsonFileListingSource, ListingSource, MockListingSource,
    SearchSession, SortKey,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search rental listings from the command line
#[derive(Debug, Parser)]
#[command(name = "rental-search", version)]
struct Cli {
    /// JSON listings file (overrides RENTAL_SEARCH_LISTINGS)
    #[arg(long)]
    listings: Option<PathBuf>,

    /// Free-text search over title, location and type
    #[arg(short, long, default_value = "")]
    query: String,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    min_rent: Option<i64>,

    #[arg(long)]
    max_rent: Option<i64>,

    /// Property type, repeatable
    #[arg(long = "type")]
    property_types: Vec<String>,

    /// Bedroom count or "5+", repeatable
    #[arg(long)]
    bhk: Vec<BedroomLabel>,

    /// Required amenity, repeatable
    #[arg(long)]
    amenity: Vec<String>,

    /// Only listings available by this date (YYYY-MM-DD)
    #[arg(long)]
    available_by: Option<NaiveDate>,

    /// relevance, price-low, price-high, newest or distance
    #[arg(short, long)]
    sort: Option<SortKey>,

    /// Print the matching listings as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria {
            location_substring: self.location.clone(),
            min_rent: self.min_rent,
            max_rent: self.max_rent,
            available_by: self.available_by,
            ..FilterCriteria::default()
        };
        for property_type in &self.property_types {
            criteria = criteria.with_property_type(property_type);
        }
        criteria.bedroom_counts.extend(self.bhk.iter().copied());
        criteria
            .required_amenities
            .extend(self.amenity.iter().cloned());
        criteria
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let source: Box<dyn ListingSource> = match cli.listings.clone().or(config.listings_path) {
        Some(path) => Box::new(JsonFileListingSource::new(path)),
        None => Box::new(MockListingSource::new()),
    };

    let mut session = SearchSession::load(source.as_ref()).await?;
    session.set_query(cli.query.as_str());
    session.set_criteria(cli.criteria());
    session.set_sort(cli.sort.unwrap_or(config.default_sort));

    let results = session.results();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results.to_owned_records())?);
        return Ok(());
    }

    info!("🏠 Rental Search - {}", session.sort().label());

    let chips = session.active_filters();
    if !chips.is_empty() {
        let rendered: Vec<String> = chips
            .iter()
            .map(|chip| format!("{}: {}", chip.label, chip.value))
            .collect();
        println!("Active filters: {}", rendered.join(" | "));
    }

    if session.query().is_empty() {
        println!("{} properties found\n", results.len());
    } else {
        println!("{} properties found for \"{}\"\n", results.len(), session.query());
    }

    for (i, listing) in results.iter().enumerate() {
        let marker = if listing.bookmarked { " ★" } else { "" };
        println!("{}. {} (₹{}/month){}", i + 1, listing.title, listing.rent_amount, marker);
        println!("   {} · {} · {} BHK", listing.location, listing.property_type, listing.bedroom_count);
        println!("   Available from {} · posted {}", listing.available_from, listing.posted_date);
        if !listing.amenities.is_empty() {
            let amenities: Vec<&str> = listing.amenities.iter().map(String::as_str).collect();
            println!("   Amenities: {}", amenities.join(", "));
        }
        println!("   ID: {}", listing.id);
        println!();
    }

    if results.is_empty() {
        println!("No properties found. Try one of these areas:");
        for area in session.popular_areas() {
            println!("   {}", area);
        }
    }

    Ok(())
}
