use serde::{Deserialize, Serialize};

use super::jurisdiction::Jurisdiction;

/// Amenity categories recognized by the Development Location rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityCategory {
    Hospital,
    School,
    Supermarket,
    Restaurant,
    TransitStop,
}

impl AmenityCategory {
    pub const ALL: [Self; 5] = [
        Self::Hospital,
        Self::School,
        Self::Supermarket,
        Self::Restaurant,
        Self::TransitStop,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hospital => "Hospital",
            Self::School => "School",
            Self::Supermarket => "Grocery Store",
            Self::Restaurant => "Restaurant",
            Self::TransitStop => "Transit Stop",
        }
    }

    /// Stable machine-readable name used in identifiers and CSV exports.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::School => "school",
            Self::Supermarket => "supermarket",
            Self::Restaurant => "restaurant",
            Self::TransitStop => "transit_stop",
        }
    }
}

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A nearby point of interest returned by an amenity source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub category: AmenityCategory,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

/// Distance constraint violation on a caller-supplied amenity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("amenity '{id}' must have a finite distance greater than zero, got {distance_km} km")]
pub struct AmenityDistanceError {
    pub id: String,
    pub distance_km: f64,
}

impl Amenity {
    /// Projection consumed by the scorer; immutable once produced.
    pub fn record(&self) -> AmenityRecord {
        AmenityRecord {
            category: self.category,
            distance_km: self.distance_km,
        }
    }

    /// Distances must be finite and positive before they reach the scorer.
    pub fn validate_distance(&self) -> Result<(), AmenityDistanceError> {
        if self.distance_km.is_finite() && self.distance_km > 0.0 {
            Ok(())
        } else {
            Err(AmenityDistanceError {
                id: self.id.clone(),
                distance_km: self.distance_km,
            })
        }
    }
}

/// Minimal scoring view of an amenity: what it is and how far away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmenityRecord {
    pub category: AmenityCategory,
    pub distance_km: f64,
}

/// Location selection submitted for scoring, prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationQuery {
    pub jurisdiction: Jurisdiction,
    pub city: String,
    pub zip_code: String,
    pub address: String,
}

/// A validated location with resolved coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteLocation {
    pub jurisdiction: Jurisdiction,
    pub city: String,
    pub zip_code: String,
    pub address: String,
    pub coordinates: Coordinates,
}
