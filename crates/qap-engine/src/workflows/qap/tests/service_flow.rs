use std::sync::Arc;

use super::common::{amenity, approx, california_query, texas_query, FailingAmenitySource};
use crate::workflows::qap::domain::AmenityCategory;
use crate::workflows::qap::report::QapScoreReport;
use crate::workflows::qap::scoring::ScoringConfig;
use crate::workflows::qap::service::{AmenityProvenance, QapScoreService, QapServiceError};

fn sample_amenities() -> Vec<crate::workflows::qap::domain::Amenity> {
    vec![
        amenity(AmenityCategory::Hospital, 0, 1.0),
        amenity(AmenityCategory::School, 0, 0.5),
        amenity(AmenityCategory::Supermarket, 0, 2.0),
        amenity(AmenityCategory::Restaurant, 0, 0.8),
        amenity(AmenityCategory::TransitStop, 0, 0.3),
    ]
}

#[tokio::test]
async fn evaluate_scores_a_texas_site_end_to_end() {
    let service = super::common::service_with(sample_amenities());

    let scored = service.evaluate(texas_query()).await.expect("site scores");

    assert_eq!(scored.data_source, AmenityProvenance::Lookup);
    assert_eq!(scored.amenities.len(), 5);
    assert!(approx(scored.breakdown.max_points, 17.0));
    // Variety 5, volume 2.5, proximity from the three closest
    // (0.3, 0.5, 0.8 km averaging ~0.533 km).
    assert!(approx(scored.breakdown.variety_points, 5.0));
    assert!(approx(scored.breakdown.volume_points, 2.5));
    assert!(scored.breakdown.proximity_points > 2.5);
    assert!(scored.breakdown.normalized_points <= 17.0);
    assert!(scored.total_percentage > 0.0);
    assert!(approx(
        scored.total_percentage,
        scored.breakdown.normalized_points / 104.0 * 100.0
    ));
}

#[tokio::test]
async fn evaluate_rejects_invalid_locations_before_lookup() {
    let service = super::common::service_with(sample_amenities());
    let mut query = texas_query();
    query.zip_code = "00000".to_string();

    let error = service.evaluate(query).await.expect_err("bad ZIP");
    assert!(matches!(error, QapServiceError::Location(_)));
}

#[tokio::test]
async fn evaluate_surfaces_lookup_failures() {
    let service = QapScoreService::new(
        Arc::new(FailingAmenitySource),
        ScoringConfig::default(),
    );

    let error = service
        .evaluate(california_query())
        .await
        .expect_err("source offline");
    assert!(matches!(error, QapServiceError::Lookup(_)));
}

#[test]
fn evaluate_provided_skips_the_source() {
    let service = super::common::service_with(Vec::new());

    let scored = service
        .evaluate_provided(california_query(), sample_amenities())
        .expect("site scores");

    assert_eq!(scored.data_source, AmenityProvenance::Provided);
    assert!(approx(scored.breakdown.max_points, 15.0));
    assert!(approx(
        scored.total_percentage,
        scored.breakdown.normalized_points / 81.0 * 100.0
    ));
}

#[test]
fn evaluate_provided_rejects_non_positive_distances() {
    let service = super::common::service_with(Vec::new());

    // A negative distance would inflate the proximity term past the raw
    // score ceiling, so it must never reach the scorer.
    let mut amenities = sample_amenities();
    amenities[2].distance_km = -100.0;
    let error = service
        .evaluate_provided(texas_query(), amenities)
        .expect_err("negative distance");
    assert!(matches!(error, QapServiceError::InvalidAmenity(_)));

    let mut amenities = sample_amenities();
    amenities[0].distance_km = f64::NAN;
    let error = service
        .evaluate_provided(texas_query(), amenities)
        .expect_err("non-finite distance");
    assert!(matches!(error, QapServiceError::InvalidAmenity(_)));
}

#[test]
fn report_summary_carries_the_full_criteria_table() {
    let service = super::common::service_with(Vec::new());
    let scored = service
        .evaluate_provided(texas_query(), sample_amenities())
        .expect("site scores");

    let summary = QapScoreReport::new(&scored).summary();

    assert_eq!(summary.criteria.len(), 10);
    assert!(approx(summary.total_max_points, 104.0));
    assert_eq!(summary.amenity_count, 5);
    assert_eq!(summary.components.len(), 3);
    assert!(summary
        .criteria
        .iter()
        .any(|row| row.data_source == "OpenStreetMap"));
    assert!(approx(
        summary.development_location_points,
        scored.breakdown.normalized_points
    ));
}
