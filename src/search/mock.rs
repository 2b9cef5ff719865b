use crate::models::{ListingRecord, Owner};
use crate::search::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

/// Built-in sample listings used when no listings file is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct MockListingSource;

impl MockListingSource {
    pub fn new() -> Self {
        Self
    }

    /// The six sample listings of the search page
    pub fn listings() -> Result<Vec<ListingRecord>> {
        Ok(vec![
            sample(
                1,
                "Spacious 2BHK Apartment in Bandra West",
                "Bandra West, Mumbai, Maharashtra",
                (45_000, 90_000),
                "Apartment",
                (2, 2, 950),
                &["Parking", "Gym", "Security", "Power Backup"],
                ("Rajesh Kumar", "+91 98765 43210"),
                ("2025-08-01", "2025-07-15"),
                false,
                &[
                    "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800",
                    "https://images.unsplash.com/photo-1560449752-8d4e8b5c3e5e?w=800",
                    "https://images.unsplash.com/photo-1560448075-bb485b067938?w=800",
                ],
            )?,
            sample(
                2,
                "Modern 3BHK Villa with Garden",
                "Koramangala, Bangalore, Karnataka",
                (65_000, 130_000),
                "Villa",
                (3, 3, 1400),
                &["Parking", "Garden", "Security", "Power Backup", "Swimming Pool"],
                ("Priya Sharma", "+91 87654 32109"),
                ("2025-07-25", "2025-07-12"),
                true,
                &[
                    "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=800",
                    "https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=800",
                ],
            )?,
            sample(
                3,
                "Cozy 1BHK Studio Near IT Hub",
                "Gurgaon Sector 29, Haryana",
                (28_000, 56_000),
                "Studio",
                (1, 1, 600),
                &["Parking", "Gym", "Security", "Lift"],
                ("Amit Patel", "+91 76543 21098"),
                ("2025-08-15", "2025-07-18"),
                false,
                &[
                    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800",
                    "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800",
                ],
            )?,
            sample(
                4,
                "Luxury 4BHK Penthouse with City View",
                "Powai, Mumbai, Maharashtra",
                (120_000, 240_000),
                "Penthouse",
                (4, 4, 2200),
                &["Parking", "Gym", "Swimming Pool", "Security", "Power Backup", "Club House"],
                ("Neha Gupta", "+91 65432 10987"),
                ("2025-09-01", "2025-07-10"),
                false,
                &[
                    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800",
                    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=800",
                ],
            )?,
            sample(
                5,
                "Family 3BHK House with Parking",
                "Indiranagar, Bangalore, Karnataka",
                (55_000, 110_000),
                "House",
                (3, 2, 1200),
                &["Parking", "Garden", "Security"],
                ("Suresh Reddy", "+91 54321 09876"),
                ("2025-08-10", "2025-07-16"),
                true,
                &["https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=800"],
            )?,
            sample(
                6,
                "Modern 2BHK with Balcony",
                "Andheri East, Mumbai, Maharashtra",
                (38_000, 76_000),
                "Apartment",
                (2, 2, 850),
                &["Parking", "Lift", "Security", "Power Backup"],
                ("Kavita Singh", "+91 43210 98765"),
                ("2025-07-30", "2025-07-14"),
                false,
                &[
                    "https://images.unsplash.com/photo-1560448204-603b3fc33ddc?w=800",
                    "https://images.unsplash.com/photo-1560448075-bb485b067938?w=800",
                ],
            )?,
        ])
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn load(&self) -> Result<Vec<ListingRecord>> {
        let listings = Self::listings()?;
        info!("📋 Loaded {} sample listings", listings.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "Sample listings"
    }
}

/// (rent, deposit), (bedrooms, bathrooms, sqft), (owner, phone),
/// (available from, posted)
#[allow(clippy::too_many_arguments)]
fn sample(
    id: u64,
    title: &str,
    location: &str,
    (rent, deposit): (u64, u64),
    property_type: &str,
    (bedrooms, bathrooms, area_sqft): (u32, u32, u32),
    amenities: &[&str],
    (owner, phone): (&str, &str),
    (available_from, posted): (&str, &str),
    bookmarked: bool,
    images: &[&str],
) -> Result<ListingRecord> {
    let available_from = parse_date(available_from)?;
    let posted_date = parse_date(posted)?;

    let mut record = ListingRecord::new(
        id,
        title,
        location,
        rent,
        property_type,
        bedrooms,
        posted_date,
        available_from,
    )
    .with_amenities(amenities.iter().copied());
    record.bookmarked = bookmarked;
    record.deposit = Some(deposit);
    record.bathroom_count = Some(bathrooms);
    record.area_sqft = Some(area_sqft);
    record.images = images.iter().map(|url| url.to_string()).collect();
    record.owner = Some(Owner {
        name: owner.to_string(),
        phone: phone.to_string(),
    });
    Ok(record)
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid sample date: {}", value))
}
