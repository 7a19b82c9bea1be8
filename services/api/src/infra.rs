use std::future::Future;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use qap_engine::config::AmenityConfig;
use qap_engine::workflows::qap::{
    Amenity, AmenityCategory, AmenityLookupError, AmenitySource, Coordinates, Jurisdiction,
    ScoringConfig,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Amenity source generating demo data around the queried origin.
///
/// Stands in for a real Overpass/geocoding integration: each category yields
/// zero to three points within roughly 1.6 km, with the distance derived
/// from the offset at ~111 km per degree. A fixed seed makes the output
/// reproducible; the optional latency models the upstream round trip.
pub(crate) struct SimulatedAmenitySource {
    rng: Mutex<StdRng>,
    latency: Duration,
}

impl SimulatedAmenitySource {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
            latency: Duration::ZERO,
        }
    }

    pub(crate) fn from_config(config: &AmenityConfig) -> Self {
        Self::new(config.seed).with_latency(Duration::from_millis(config.lookup_latency_ms))
    }

    pub(crate) fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl AmenitySource for SimulatedAmenitySource {
    fn fetch_nearby(
        &self,
        origin: Coordinates,
    ) -> impl Future<Output = Result<Vec<Amenity>, AmenityLookupError>> + Send {
        async move {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }

            let mut rng = self.rng.lock().expect("rng mutex poisoned");
            let mut amenities = Vec::new();

            for category in AmenityCategory::ALL {
                let count = rng.gen_range(0..=3);
                for index in 0..count {
                    let lat_offset: f64 = rng.gen_range(-0.01..0.01);
                    let lon_offset: f64 = rng.gen_range(-0.01..0.01);
                    let distance_km = ((lat_offset * lat_offset + lon_offset * lon_offset).sqrt()
                        * 111.0
                        * 10.0)
                        .round()
                        / 10.0;

                    amenities.push(Amenity {
                        id: format!("{}-{index}", category.slug()),
                        name: format!("{} {}", category.label(), index + 1),
                        category,
                        latitude: origin.latitude + lat_offset,
                        longitude: origin.longitude + lon_offset,
                        distance_km,
                    });
                }
            }

            Ok(amenities)
        }
    }
}

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig {
        variety_max_points: 5.0,
        volume_max_points: 5.0,
        volume_saturation: 10,
        proximity_max_points: 3.0,
        proximity_cutoff_km: 5.0,
        proximity_sample_size: 3,
    }
}

pub(crate) fn parse_jurisdiction(raw: &str) -> Result<Jurisdiction, String> {
    Jurisdiction::parse(raw)
        .ok_or_else(|| format!("unknown state '{raw}' (expected Texas or California)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_sources_are_reproducible() {
        let origin = Jurisdiction::Texas.centroid();
        let first = SimulatedAmenitySource::new(Some(11))
            .fetch_nearby(origin)
            .await
            .expect("lookup succeeds");
        let second = SimulatedAmenitySource::new(Some(11))
            .fetch_nearby(origin)
            .await
            .expect("lookup succeeds");

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn generated_amenities_stay_near_the_origin() {
        let origin = Jurisdiction::California.centroid();
        let amenities = SimulatedAmenitySource::new(Some(3))
            .fetch_nearby(origin)
            .await
            .expect("lookup succeeds");

        for amenity in &amenities {
            assert!((amenity.latitude - origin.latitude).abs() < 0.01);
            assert!((amenity.longitude - origin.longitude).abs() < 0.01);
            assert!(amenity.distance_km >= 0.0);
            assert!(amenity.distance_km < 2.0);
        }
    }

    #[test]
    fn jurisdiction_parser_matches_cli_expectations() {
        assert_eq!(parse_jurisdiction("Texas"), Ok(Jurisdiction::Texas));
        assert_eq!(parse_jurisdiction("ca"), Ok(Jurisdiction::California));
        assert!(parse_jurisdiction("Oregon").is_err());
    }
}
