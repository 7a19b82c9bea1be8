use std::future::Future;
use std::sync::Arc;

use crate::workflows::qap::amenities::{AmenityLookupError, AmenitySource};
use crate::workflows::qap::domain::{
    Amenity, AmenityCategory, AmenityRecord, Coordinates, LocationQuery,
};
use crate::workflows::qap::jurisdiction::Jurisdiction;
use crate::workflows::qap::scoring::ScoringConfig;
use crate::workflows::qap::service::QapScoreService;

pub(super) fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

pub(super) fn record(category: AmenityCategory, distance_km: f64) -> AmenityRecord {
    AmenityRecord {
        category,
        distance_km,
    }
}

pub(super) fn amenity(category: AmenityCategory, index: usize, distance_km: f64) -> Amenity {
    Amenity {
        id: format!("{}-{index}", category.slug()),
        name: format!("{} {}", category.label(), index + 1),
        category,
        latitude: 31.97,
        longitude: -99.9,
        distance_km,
    }
}

pub(super) fn texas_query() -> LocationQuery {
    LocationQuery {
        jurisdiction: Jurisdiction::Texas,
        city: "Houston".to_string(),
        zip_code: "77001".to_string(),
        address: "500 Main St".to_string(),
    }
}

pub(super) fn california_query() -> LocationQuery {
    LocationQuery {
        jurisdiction: Jurisdiction::California,
        city: "Sacramento".to_string(),
        zip_code: "95814".to_string(),
        address: "1020 O St".to_string(),
    }
}

/// Source returning a fixed amenity list regardless of origin.
#[derive(Debug, Clone, Default)]
pub(super) struct StubAmenitySource {
    pub(super) amenities: Vec<Amenity>,
}

impl AmenitySource for StubAmenitySource {
    fn fetch_nearby(
        &self,
        _origin: Coordinates,
    ) -> impl Future<Output = Result<Vec<Amenity>, AmenityLookupError>> + Send {
        let amenities = self.amenities.clone();
        async move { Ok(amenities) }
    }
}

/// Source that always fails, for lookup error paths.
#[derive(Debug, Clone, Default)]
pub(super) struct FailingAmenitySource;

impl AmenitySource for FailingAmenitySource {
    fn fetch_nearby(
        &self,
        _origin: Coordinates,
    ) -> impl Future<Output = Result<Vec<Amenity>, AmenityLookupError>> + Send {
        async move {
            Err(AmenityLookupError::Unavailable(
                "overpass mirror offline".to_string(),
            ))
        }
    }
}

pub(super) fn service_with(amenities: Vec<Amenity>) -> QapScoreService<StubAmenitySource> {
    QapScoreService::new(
        Arc::new(StubAmenitySource { amenities }),
        ScoringConfig::default(),
    )
}
