mod export;
pub mod views;

pub use export::{write_amenity_schedule, write_criteria_table};
pub use views::{AmenityView, CriterionRow, QapReportSummary, ScoreComponentView};

use super::jurisdiction::scoring_table;
use super::service::ScoredSite;

/// Report builder turning a scored site into caller-facing views.
#[derive(Debug)]
pub struct QapScoreReport<'a> {
    scored: &'a ScoredSite,
}

impl<'a> QapScoreReport<'a> {
    pub fn new(scored: &'a ScoredSite) -> Self {
        Self { scored }
    }

    pub fn summary(&self) -> QapReportSummary {
        let jurisdiction = self.scored.site.jurisdiction;

        let criteria = scoring_table()
            .iter()
            .map(|category| CriterionRow {
                category: category.name,
                max_points: category.max_points(jurisdiction),
                data_source: if category.data_available {
                    "OpenStreetMap"
                } else {
                    "Not Available"
                },
            })
            .collect();

        let components = self
            .scored
            .breakdown
            .components
            .iter()
            .map(|component| ScoreComponentView {
                term: component.term,
                term_label: component.term.label(),
                points: component.points,
                notes: component.notes.clone(),
            })
            .collect();

        let amenities: Vec<AmenityView> = self
            .scored
            .amenities
            .iter()
            .map(|amenity| AmenityView {
                id: amenity.id.clone(),
                name: amenity.name.clone(),
                category: amenity.category,
                category_label: amenity.category.label(),
                distance_km: amenity.distance_km,
                latitude: amenity.latitude,
                longitude: amenity.longitude,
            })
            .collect();

        QapReportSummary {
            jurisdiction,
            jurisdiction_label: jurisdiction.label(),
            criteria,
            total_max_points: jurisdiction.total_max_points(),
            components,
            raw_points: self.scored.breakdown.raw_points,
            development_location_points: self.scored.breakdown.normalized_points,
            development_location_max_points: self.scored.breakdown.max_points,
            amenity_count: amenities.len(),
            amenities,
            total_percentage: self.scored.total_percentage,
        }
    }
}
