use std::future::Future;

use super::domain::{Amenity, Coordinates};

/// Upstream amenity lookup failures.
#[derive(Debug, thiserror::Error)]
pub enum AmenityLookupError {
    #[error("amenity source unavailable: {0}")]
    Unavailable(String),
}

/// Abstraction over the nearby-amenity lookup so the scoring service can be
/// exercised against simulated, recorded, or live data sources.
///
/// Lookups are asynchronous and carry no retry semantics; dropping the
/// returned future cancels the request.
pub trait AmenitySource: Send + Sync {
    fn fetch_nearby(
        &self,
        origin: Coordinates,
    ) -> impl Future<Output = Result<Vec<Amenity>, AmenityLookupError>> + Send;
}
