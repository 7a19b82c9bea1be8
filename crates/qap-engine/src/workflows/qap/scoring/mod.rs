mod config;
mod rules;

pub use config::ScoringConfig;

use serde::{Deserialize, Serialize};

use super::domain::AmenityRecord;

/// Terms composing the Development Location raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringTerm {
    Variety,
    Volume,
    Proximity,
}

impl ScoringTerm {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Variety => "Amenity Variety",
            Self::Volume => "Amenity Volume",
            Self::Proximity => "Proximity",
        }
    }
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub term: ScoringTerm,
    pub points: f64,
    pub notes: String,
}

/// Result of scoring one amenity set against a jurisdiction maximum.
///
/// `normalized_points` never exceeds `max_points` and is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub variety_points: f64,
    pub volume_points: f64,
    pub proximity_points: f64,
    pub raw_points: f64,
    pub max_points: f64,
    pub normalized_points: f64,
}

impl ScoreBreakdown {
    fn zero(max_points: f64) -> Self {
        Self {
            components: Vec::new(),
            variety_points: 0.0,
            volume_points: 0.0,
            proximity_points: 0.0,
            raw_points: 0.0,
            max_points,
            normalized_points: 0.0,
        }
    }
}

/// Stateless scorer for the Development Location category.
///
/// The computation is pure: identical inputs always produce identical
/// breakdowns, and no state is carried between invocations.
#[derive(Debug, Clone)]
pub struct DevelopmentLocationScorer {
    config: ScoringConfig,
}

impl Default for DevelopmentLocationScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl DevelopmentLocationScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a set of nearby amenities, scaled to the jurisdiction maximum.
    ///
    /// An empty amenity set scores zero. The raw score is normalized by the
    /// rubric ceiling and clamped to `[0, max_points]` so float rounding can
    /// never push the result past the jurisdiction cap.
    pub fn score(&self, amenities: &[AmenityRecord], max_points: f64) -> ScoreBreakdown {
        if amenities.is_empty() {
            return ScoreBreakdown::zero(max_points);
        }

        let (components, terms) = rules::score_terms(amenities, &self.config);
        let raw_points = terms.variety + terms.volume + terms.proximity;

        let ceiling = self.config.raw_score_ceiling();
        let normalized_points = if ceiling > 0.0 {
            (raw_points / ceiling * max_points)
                .min(max_points)
                .max(0.0)
        } else {
            0.0
        };

        ScoreBreakdown {
            components,
            variety_points: terms.variety,
            volume_points: terms.volume,
            proximity_points: terms.proximity,
            raw_points,
            max_points,
            normalized_points,
        }
    }
}

/// Share of `total_points` earned, as a percentage.
///
/// Returns `None` when the denominator is not positive so callers report an
/// empty score instead of NaN or infinity.
pub fn percentage_of(points: f64, total_points: f64) -> Option<f64> {
    if total_points > 0.0 {
        Some(points / total_points * 100.0)
    } else {
        None
    }
}
