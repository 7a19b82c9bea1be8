use serde::{Deserialize, Serialize};

use super::domain::Coordinates;

/// Category name carrying the only rubric with an available data source.
pub const DEVELOPMENT_LOCATION_CATEGORY: &str = "Development Location";

/// States with a supported Qualified Allocation Plan scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    Texas,
    California,
}

impl Jurisdiction {
    pub const ALL: [Self; 2] = [Self::Texas, Self::California];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Texas => "Texas",
            Self::California => "California",
        }
    }

    /// Case-insensitive parse accepting full names and postal abbreviations.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "texas" | "tx" => Some(Self::Texas),
            "california" | "ca" => Some(Self::California),
            _ => None,
        }
    }

    /// Approximate state centroid standing in for real geocoding.
    pub const fn centroid(self) -> Coordinates {
        match self {
            Self::Texas => Coordinates {
                latitude: 31.9686,
                longitude: -99.9018,
            },
            Self::California => Coordinates {
                latitude: 36.7783,
                longitude: -119.4179,
            },
        }
    }

    /// Maximum points awardable for the Development Location category.
    pub fn development_location_max_points(self) -> f64 {
        scoring_table()
            .iter()
            .find(|category| category.name == DEVELOPMENT_LOCATION_CATEGORY)
            .map(|category| category.max_points(self))
            .unwrap_or_default()
    }

    /// Sum of every category maximum, the denominator for percentage scores.
    pub fn total_max_points(self) -> f64 {
        scoring_table()
            .iter()
            .map(|category| category.max_points(self))
            .sum()
    }
}

/// One row of the static QAP scoring table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringCategory {
    pub name: &'static str,
    pub texas_max: f64,
    pub california_max: f64,
    pub description: &'static str,
    pub data_available: bool,
}

impl ScoringCategory {
    pub const fn max_points(&self, jurisdiction: Jurisdiction) -> f64 {
        match jurisdiction {
            Jurisdiction::Texas => self.texas_max,
            Jurisdiction::California => self.california_max,
        }
    }
}

static SCORING_TABLE: [ScoringCategory; 10] = [
    ScoringCategory {
        name: "Financial Feasibility and Cost of Development",
        texas_max: 14.0,
        california_max: 12.0,
        description: "Points awarded based on cost per square foot and financial feasibility of the development.",
        data_available: false,
    },
    ScoringCategory {
        name: DEVELOPMENT_LOCATION_CATEGORY,
        texas_max: 17.0,
        california_max: 15.0,
        description: "Points for developments in areas with high opportunity indices, proximity to amenities, and underserved areas.",
        data_available: true,
    },
    ScoringCategory {
        name: "Tenant Populations with Special Needs",
        texas_max: 5.0,
        california_max: 5.0,
        description: "Incentivizes support for individuals with disabilities or homelessness.",
        data_available: false,
    },
    ScoringCategory {
        name: "Income and Rent Levels of Tenants",
        texas_max: 16.0,
        california_max: 10.0,
        description: "Encourages deeper income targeting and reduced rents.",
        data_available: false,
    },
    ScoringCategory {
        name: "Size and Quality of Units",
        texas_max: 7.0,
        california_max: 8.0,
        description: "Rewards for larger unit sizes and inclusion of amenities.",
        data_available: false,
    },
    ScoringCategory {
        name: "Tenant Services",
        texas_max: 10.0,
        california_max: 6.0,
        description: "Points for providing supportive services like education, health, etc.",
        data_available: false,
    },
    ScoringCategory {
        name: "Readiness to Proceed",
        texas_max: 10.0,
        california_max: 5.0,
        description: "Scores readiness for construction start.",
        data_available: false,
    },
    ScoringCategory {
        name: "Development Team Experience",
        texas_max: 10.0,
        california_max: 4.0,
        description: "Considers the team's history with successful LIHTC projects.",
        data_available: false,
    },
    ScoringCategory {
        name: "State Housing Priorities",
        texas_max: 10.0,
        california_max: 12.0,
        description: "Rewards alignment with state-specific goals (e.g., rural housing, preservation).",
        data_available: false,
    },
    ScoringCategory {
        name: "Eviction Prevention Plans",
        texas_max: 5.0,
        california_max: 4.0,
        description: "Incentivizes structured eviction prevention with case management.",
        data_available: false,
    },
];

/// The full ten-category QAP scoring table shared by both jurisdictions.
pub fn scoring_table() -> &'static [ScoringCategory] {
    &SCORING_TABLE
}
