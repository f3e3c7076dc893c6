use serde::{Deserialize, Serialize};

use super::ids::DestinationId;

/// Catalog entry. Seeded once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub image_url: String,
}

impl Destination {
    /// Case-insensitive substring match on name, description or country.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.country]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
