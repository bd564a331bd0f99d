//! Room catalog and party-size availability filter.
//!
//! The catalog is immutable reference data: the three apartment types the
//! property rents, with their nightly rates and occupancy limits. There is no
//! backing inventory system; the per-type `available` count is the fixed unit
//! count of the building.

use serde::{Deserialize, Serialize};

/// Identifier for a room type in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Creates a `RoomId` from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A bookable room type
///
/// Immutable catalog entry. `original_rate` is the struck-through rate shown
/// when the room is on offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    /// Catalog identifier
    pub id: RoomId,
    /// Display name
    pub name: String,
    /// Short marketing description
    pub description: String,
    /// Nightly rate in dollars
    pub rate: f64,
    /// Pre-offer nightly rate, if the room is discounted
    pub original_rate: Option<f64>,
    /// Number of beds
    pub beds: u32,
    /// Number of bathrooms
    pub baths: u32,
    /// Maximum adults the room sleeps
    pub max_adults: u32,
    /// Maximum children on top of the adult limit
    pub max_children: u32,
    /// Feature tags shown on the room card
    pub features: Vec<String>,
    /// Units of this type in the building
    pub available: u32,
}

impl RoomType {
    /// Whether a party fits this room type
    ///
    /// A party fits when the adults fit the adult limit and the whole party
    /// fits the combined limit.
    #[must_use]
    pub const fn fits_party(&self, adults: u32, children: u32) -> bool {
        self.max_adults >= adults && self.max_adults + self.max_children >= adults + children
    }
}

/// The room catalog: static, read-only reference data
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    rooms: Vec<RoomType>,
}

impl Catalog {
    /// Builds a catalog from explicit entries
    #[must_use]
    pub fn new(rooms: Vec<RoomType>) -> Self {
        Self { rooms }
    }

    /// The Seaside Suites catalog: studio, garden suite, family apartment
    #[must_use]
    pub fn seaside() -> Self {
        fn tags(features: &[&str]) -> Vec<String> {
            features.iter().map(ToString::to_string).collect()
        }

        Self::new(vec![
            RoomType {
                id: RoomId::new("studio"),
                name: "Ocean View Studio".to_string(),
                description: "Elegant studio with stunning ocean views, perfect for couples."
                    .to_string(),
                rate: 120.0,
                original_rate: None,
                beds: 1,
                baths: 1,
                max_adults: 2,
                max_children: 1,
                features: tags(&["Ocean View", "Kitchenette", "Private Balcony", "Work Desk"]),
                available: 3,
            },
            RoomType {
                id: RoomId::new("suite"),
                name: "Garden Suite".to_string(),
                description: "Spacious suite overlooking beautiful gardens with premium amenities."
                    .to_string(),
                rate: 150.0,
                original_rate: Some(180.0),
                beds: 1,
                baths: 1,
                max_adults: 3,
                max_children: 2,
                features: tags(&["Garden View", "Full Kitchen", "Living Area", "Premium Bedding"]),
                available: 2,
            },
            RoomType {
                id: RoomId::new("family"),
                name: "Family Apartment".to_string(),
                description: "Perfect for families with two bedrooms and spacious living area."
                    .to_string(),
                rate: 200.0,
                original_rate: None,
                beds: 2,
                baths: 2,
                max_adults: 4,
                max_children: 3,
                features: tags(&["Two Bedrooms", "Full Kitchen", "Living Room", "Washer/Dryer"]),
                available: 1,
            },
        ])
    }

    /// All rooms in catalog order
    #[must_use]
    pub fn rooms(&self) -> &[RoomType] {
        &self.rooms
    }

    /// Looks up a room type by id
    #[must_use]
    pub fn get(&self, id: &RoomId) -> Option<&RoomType> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// Filters the catalog to rooms that fit the party
    ///
    /// Pure and synchronous; the loading delay shown around the availability
    /// check is cosmetic and lives in the wizard, not here.
    #[must_use]
    pub fn rooms_for_party(&self, adults: u32, children: u32) -> Vec<&RoomType> {
        self.rooms
            .iter()
            .filter(|room| room.fits_party(adults, children))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seaside()
    }
}
