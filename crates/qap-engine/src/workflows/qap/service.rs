use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::amenities::{AmenityLookupError, AmenitySource};
use super::domain::{Amenity, AmenityDistanceError, AmenityRecord, LocationQuery, SiteLocation};
use super::locations::{self, LocationError};
use super::scoring::{percentage_of, DevelopmentLocationScorer, ScoreBreakdown, ScoringConfig};

/// Where the scored amenity data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityProvenance {
    /// Fetched from the configured amenity source.
    Lookup,
    /// Supplied by the caller alongside the request.
    Provided,
}

impl AmenityProvenance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lookup => "amenity lookup",
            Self::Provided => "caller-provided",
        }
    }
}

/// A fully evaluated site: validated location, amenities, and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSite {
    pub site: SiteLocation,
    pub data_source: AmenityProvenance,
    pub amenities: Vec<Amenity>,
    pub breakdown: ScoreBreakdown,
    pub total_percentage: f64,
    pub evaluated_at: DateTime<Utc>,
}

/// Failures surfaced while evaluating a score request.
#[derive(Debug, thiserror::Error)]
pub enum QapServiceError {
    #[error("location error: {0}")]
    Location(#[from] LocationError),
    #[error("invalid amenity: {0}")]
    InvalidAmenity(#[from] AmenityDistanceError),
    #[error("amenity lookup error: {0}")]
    Lookup(#[from] AmenityLookupError),
}

/// Service composing location validation, the amenity source, and the
/// Development Location scorer.
pub struct QapScoreService<S> {
    source: Arc<S>,
    scorer: DevelopmentLocationScorer,
}

impl<S> QapScoreService<S>
where
    S: AmenitySource + 'static,
{
    pub fn new(source: Arc<S>, config: ScoringConfig) -> Self {
        Self {
            source,
            scorer: DevelopmentLocationScorer::new(config),
        }
    }

    /// Validate the location, fetch nearby amenities, and score the site.
    pub async fn evaluate(&self, query: LocationQuery) -> Result<ScoredSite, QapServiceError> {
        let site = locations::resolve(&query)?;
        let amenities = self.source.fetch_nearby(site.coordinates).await?;
        Ok(self.assemble(site, amenities, AmenityProvenance::Lookup))
    }

    /// Score caller-supplied amenities instead of querying the source.
    pub fn evaluate_provided(
        &self,
        query: LocationQuery,
        amenities: Vec<Amenity>,
    ) -> Result<ScoredSite, QapServiceError> {
        let site = locations::resolve(&query)?;
        for amenity in &amenities {
            amenity.validate_distance()?;
        }
        Ok(self.assemble(site, amenities, AmenityProvenance::Provided))
    }

    fn assemble(
        &self,
        site: SiteLocation,
        amenities: Vec<Amenity>,
        data_source: AmenityProvenance,
    ) -> ScoredSite {
        let records: Vec<AmenityRecord> = amenities.iter().map(Amenity::record).collect();
        let max_points = site.jurisdiction.development_location_max_points();
        let breakdown = self.scorer.score(&records, max_points);
        let total_percentage =
            percentage_of(breakdown.normalized_points, site.jurisdiction.total_max_points())
                .unwrap_or(0.0);

        info!(
            jurisdiction = site.jurisdiction.label(),
            city = %site.city,
            amenity_count = amenities.len(),
            normalized_points = breakdown.normalized_points,
            "scored development location"
        );

        ScoredSite {
            site,
            data_source,
            amenities,
            breakdown,
            total_percentage,
            evaluated_at: Utc::now(),
        }
    }
}
