use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::amenities::AmenitySource;
use super::domain::{Amenity, AmenityCategory, Coordinates, LocationQuery};
use super::jurisdiction::Jurisdiction;
use super::report::{QapReportSummary, QapScoreReport};
use super::service::{AmenityProvenance, QapScoreService, QapServiceError};

/// Router builder exposing the scoring and criteria endpoints.
pub fn qap_router<S>(service: Arc<QapScoreService<S>>) -> Router
where
    S: AmenitySource + 'static,
{
    Router::new()
        .route("/api/v1/qap/score", post(score_handler::<S>))
        .route(
            "/api/v1/qap/jurisdictions/:jurisdiction/criteria",
            get(criteria_handler::<S>),
        )
        .with_state(service)
}

/// Score request body; when `amenities` is present those records are scored
/// instead of querying the amenity source.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub jurisdiction: Jurisdiction,
    pub city: String,
    pub zip_code: String,
    pub address: String,
    #[serde(default)]
    pub amenities: Option<Vec<AmenityInput>>,
}

/// Caller-supplied amenity; identifier, name, and coordinates are optional
/// and filled with deterministic defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct AmenityInput {
    pub category: AmenityCategory,
    pub distance_km: f64,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl AmenityInput {
    fn into_amenity(self, index: usize, origin: Coordinates) -> Amenity {
        Amenity {
            id: self
                .id
                .unwrap_or_else(|| format!("{}-{index}", self.category.slug())),
            name: self
                .name
                .unwrap_or_else(|| format!("{} {}", self.category.label(), index + 1)),
            category: self.category,
            latitude: self.latitude.unwrap_or(origin.latitude),
            longitude: self.longitude.unwrap_or(origin.longitude),
            distance_km: self.distance_km,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub jurisdiction: Jurisdiction,
    pub city: String,
    pub zip_code: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub data_source: AmenityProvenance,
    pub evaluated_at: DateTime<Utc>,
    pub report: QapReportSummary,
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<QapScoreService<S>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    S: AmenitySource + 'static,
{
    let ScoreRequest {
        jurisdiction,
        city,
        zip_code,
        address,
        amenities,
    } = request;

    let query = LocationQuery {
        jurisdiction,
        city,
        zip_code,
        address,
    };

    let scored = match amenities {
        Some(provided) => {
            let origin = jurisdiction.centroid();
            let amenities = provided
                .into_iter()
                .enumerate()
                .map(|(index, input)| input.into_amenity(index, origin))
                .collect();
            service.evaluate_provided(query, amenities)
        }
        None => service.evaluate(query).await,
    };

    match scored {
        Ok(scored) => {
            let report = QapScoreReport::new(&scored).summary();
            let response = ScoreResponse {
                jurisdiction: scored.site.jurisdiction,
                city: scored.site.city,
                zip_code: scored.site.zip_code,
                address: scored.site.address,
                coordinates: scored.site.coordinates,
                data_source: scored.data_source,
                evaluated_at: scored.evaluated_at,
                report,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(QapServiceError::Location(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(QapServiceError::InvalidAmenity(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(QapServiceError::Lookup(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CriteriaResponse {
    pub jurisdiction: Jurisdiction,
    pub jurisdiction_label: &'static str,
    pub criteria: Vec<CriterionEntry>,
    pub total_max_points: f64,
}

#[derive(Debug, Serialize)]
pub struct CriterionEntry {
    pub category: &'static str,
    pub max_points: f64,
    pub description: &'static str,
    pub data_available: bool,
}

pub(crate) async fn criteria_handler<S>(
    State(_service): State<Arc<QapScoreService<S>>>,
    Path(jurisdiction): Path<String>,
) -> Response
where
    S: AmenitySource + 'static,
{
    let Some(jurisdiction) = Jurisdiction::parse(&jurisdiction) else {
        let payload = json!({
            "error": format!("unknown jurisdiction '{jurisdiction}'"),
        });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    };

    let criteria = super::jurisdiction::scoring_table()
        .iter()
        .map(|category| CriterionEntry {
            category: category.name,
            max_points: category.max_points(jurisdiction),
            description: category.description,
            data_available: category.data_available,
        })
        .collect();

    let response = CriteriaResponse {
        jurisdiction,
        jurisdiction_label: jurisdiction.label(),
        criteria,
        total_max_points: jurisdiction.total_max_points(),
    };

    (StatusCode::OK, axum::Json(response)).into_response()
}
