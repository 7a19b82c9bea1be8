use std::collections::BTreeSet;

use super::config::ScoringConfig;
use super::{ScoreComponent, ScoringTerm};
use crate::workflows::qap::domain::{AmenityCategory, AmenityRecord};

pub(crate) struct TermPoints {
    pub variety: f64,
    pub volume: f64,
    pub proximity: f64,
}

pub(crate) fn score_terms(
    amenities: &[AmenityRecord],
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, TermPoints) {
    let mut components = Vec::new();

    let distinct: BTreeSet<AmenityCategory> =
        amenities.iter().map(|record| record.category).collect();
    let recognized = AmenityCategory::ALL.len();
    let variety = distinct.len() as f64 / recognized as f64 * config.variety_max_points;
    components.push(ScoreComponent {
        term: ScoringTerm::Variety,
        points: variety,
        notes: format!(
            "{} of {} recognized amenity categories present",
            distinct.len(),
            recognized
        ),
    });

    let volume_ratio = (amenities.len() as f64 / config.volume_saturation as f64).min(1.0);
    let volume = volume_ratio * config.volume_max_points;
    components.push(ScoreComponent {
        term: ScoringTerm::Volume,
        points: volume,
        notes: format!(
            "{} amenities counted toward a saturation of {}",
            amenities.len(),
            config.volume_saturation
        ),
    });

    let (proximity, proximity_note) = proximity_term(amenities, config);
    components.push(ScoreComponent {
        term: ScoringTerm::Proximity,
        points: proximity,
        notes: proximity_note,
    });

    (
        components,
        TermPoints {
            variety,
            volume,
            proximity,
        },
    )
}

fn proximity_term(amenities: &[AmenityRecord], config: &ScoringConfig) -> (f64, String) {
    if amenities.len() < config.proximity_sample_size {
        return (
            0.0,
            format!(
                "fewer than {} amenities nearby; proximity term not awarded",
                config.proximity_sample_size
            ),
        );
    }

    let mut by_distance: Vec<&AmenityRecord> = amenities.iter().collect();
    // Stable sort: equal distances keep their insertion order.
    by_distance.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    let sample = &by_distance[..config.proximity_sample_size];
    let average_km =
        sample.iter().map(|record| record.distance_km).sum::<f64>() / sample.len() as f64;
    let points =
        (1.0 - (average_km / config.proximity_cutoff_km).min(1.0)) * config.proximity_max_points;

    (
        points,
        format!(
            "{} closest amenities average {:.1} km (cutoff {:.1} km)",
            sample.len(),
            average_km,
            config.proximity_cutoff_km
        ),
    )
}
