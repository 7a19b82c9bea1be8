use serde::{Deserialize, Serialize};

/// Rubric thresholds for the Development Location category.
///
/// The 10-amenity volume saturation, 5 km proximity cutoff, and 3-closest
/// sample size are business rules inherited from the published rubric; they
/// are kept configurable rather than hardcoded into the formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub variety_max_points: f64,
    pub volume_max_points: f64,
    pub volume_saturation: usize,
    pub proximity_max_points: f64,
    pub proximity_cutoff_km: f64,
    pub proximity_sample_size: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            variety_max_points: 5.0,
            volume_max_points: 5.0,
            volume_saturation: 10,
            proximity_max_points: 3.0,
            proximity_cutoff_km: 5.0,
            proximity_sample_size: 3,
        }
    }
}

impl ScoringConfig {
    /// Highest raw score the three terms can sum to (13 under defaults).
    pub fn raw_score_ceiling(&self) -> f64 {
        self.variety_max_points + self.volume_max_points + self.proximity_max_points
    }
}
