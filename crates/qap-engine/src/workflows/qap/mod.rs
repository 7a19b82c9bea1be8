//! LIHTC Qualified Allocation Plan score estimation.
//!
//! The workflow validates a location selection, obtains nearby amenities
//! from an [`AmenitySource`], scores the Development Location category, and
//! derives the total score percentage against the jurisdiction's full
//! ten-category table. Scoring itself is a pure computation; the amenity
//! lookup is the only asynchronous boundary.

pub mod amenities;
pub mod domain;
pub mod jurisdiction;
pub mod locations;
pub mod report;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use amenities::{AmenityLookupError, AmenitySource};
pub use domain::{
    Amenity, AmenityCategory, AmenityDistanceError, AmenityRecord, Coordinates, LocationQuery,
    SiteLocation,
};
pub use jurisdiction::{
    scoring_table, Jurisdiction, ScoringCategory, DEVELOPMENT_LOCATION_CATEGORY,
};
pub use locations::LocationError;
pub use report::{QapReportSummary, QapScoreReport};
pub use router::{qap_router, AmenityInput, ScoreRequest, ScoreResponse};
pub use scoring::{
    percentage_of, DevelopmentLocationScorer, ScoreBreakdown, ScoreComponent, ScoringConfig,
    ScoringTerm,
};
pub use service::{AmenityProvenance, QapScoreService, QapServiceError, ScoredSite};
