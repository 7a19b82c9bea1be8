use std::future::Future;
use std::sync::Arc;

use qap_engine::workflows::qap::{
    percentage_of, qap_router, Amenity, AmenityCategory, AmenityLookupError, AmenityProvenance,
    AmenitySource, Coordinates, Jurisdiction, LocationQuery, QapScoreReport, QapScoreService,
    ScoringConfig,
};

#[derive(Debug, Clone)]
struct RecordedAmenitySource {
    amenities: Vec<Amenity>,
}

impl AmenitySource for RecordedAmenitySource {
    fn fetch_nearby(
        &self,
        _origin: Coordinates,
    ) -> impl Future<Output = Result<Vec<Amenity>, AmenityLookupError>> + Send {
        let amenities = self.amenities.clone();
        async move { Ok(amenities) }
    }
}

fn downtown_amenities() -> Vec<Amenity> {
    let mut amenities = Vec::new();
    for (index, (category, distance_km)) in [
        (AmenityCategory::Hospital, 1.3),
        (AmenityCategory::School, 0.6),
        (AmenityCategory::School, 1.8),
        (AmenityCategory::Supermarket, 0.4),
        (AmenityCategory::Restaurant, 0.2),
        (AmenityCategory::Restaurant, 0.9),
        (AmenityCategory::TransitStop, 0.1),
    ]
    .into_iter()
    .enumerate()
    {
        amenities.push(Amenity {
            id: format!("{}-{index}", category.slug()),
            name: format!("{} {}", category.label(), index + 1),
            category,
            latitude: 31.97,
            longitude: -99.9,
            distance_km,
        });
    }
    amenities
}

#[tokio::test]
async fn full_workflow_scores_and_reports_a_texas_site() {
    let source = Arc::new(RecordedAmenitySource {
        amenities: downtown_amenities(),
    });
    let service = QapScoreService::new(source, ScoringConfig::default());

    let query = LocationQuery {
        jurisdiction: Jurisdiction::Texas,
        city: "Fort Worth".to_string(),
        zip_code: "76102".to_string(),
        address: "200 Texas St".to_string(),
    };

    let scored = service.evaluate(query).await.expect("site scores");

    assert_eq!(scored.data_source, AmenityProvenance::Lookup);
    assert_eq!(scored.amenities.len(), 7);

    // All five categories present, seven amenities, three closest averaging
    // (0.1 + 0.2 + 0.4) / 3 km.
    let expected_raw = 5.0 + 0.7 * 5.0 + (1.0 - (0.7 / 3.0) / 5.0) * 3.0;
    assert!((scored.breakdown.raw_points - expected_raw).abs() < 1e-9);

    let expected_points = expected_raw / 13.0 * 17.0;
    assert!((scored.breakdown.normalized_points - expected_points).abs() < 1e-9);

    let expected_pct = percentage_of(expected_points, 104.0).expect("positive total");
    assert!((scored.total_percentage - expected_pct).abs() < 1e-9);

    let summary = QapScoreReport::new(&scored).summary();
    assert_eq!(summary.jurisdiction_label, "Texas");
    assert_eq!(summary.criteria.len(), 10);
    assert_eq!(summary.amenities.len(), 7);
}

#[tokio::test]
async fn router_is_buildable_from_the_public_api() {
    let source = Arc::new(RecordedAmenitySource {
        amenities: Vec::new(),
    });
    let service = Arc::new(QapScoreService::new(source, ScoringConfig::default()));
    let _app = qap_router(service);
}

#[test]
fn csv_exports_render_the_amenity_schedule_and_criteria() {
    use qap_engine::workflows::qap::report::{write_amenity_schedule, write_criteria_table};

    let mut schedule = Vec::new();
    write_amenity_schedule(&mut schedule, &downtown_amenities()).expect("schedule writes");
    let schedule = String::from_utf8(schedule).expect("utf8");
    assert!(schedule.starts_with("id,name,category,distance_km,latitude,longitude"));
    assert!(schedule.contains("transit_stop-6,Transit Stop 7,transit_stop,0.1"));

    let mut criteria = Vec::new();
    write_criteria_table(&mut criteria, Jurisdiction::California).expect("criteria writes");
    let criteria = String::from_utf8(criteria).expect("utf8");
    assert!(criteria.contains("Development Location,15,OpenStreetMap"));
    assert!(criteria.contains("Total,81,"));
}
