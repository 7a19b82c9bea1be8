use serde::Serialize;

use super::super::domain::AmenityCategory;
use super::super::jurisdiction::Jurisdiction;
use super::super::scoring::ScoringTerm;

/// One row of the criteria table as rendered to callers.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionRow {
    pub category: &'static str,
    pub max_points: f64,
    pub data_source: &'static str,
}

/// Amenity as rendered in reports and API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AmenityView {
    pub id: String,
    pub name: String,
    pub category: AmenityCategory,
    pub category_label: &'static str,
    pub distance_km: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Score term contribution with its audit note.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreComponentView {
    pub term: ScoringTerm,
    pub term_label: &'static str,
    pub points: f64,
    pub notes: String,
}

/// Full report payload for a scored site.
#[derive(Debug, Clone, Serialize)]
pub struct QapReportSummary {
    pub jurisdiction: Jurisdiction,
    pub jurisdiction_label: &'static str,
    pub criteria: Vec<CriterionRow>,
    pub total_max_points: f64,
    pub components: Vec<ScoreComponentView>,
    pub raw_points: f64,
    pub development_location_points: f64,
    pub development_location_max_points: f64,
    pub amenity_count: usize,
    pub amenities: Vec<AmenityView>,
    pub total_percentage: f64,
}
