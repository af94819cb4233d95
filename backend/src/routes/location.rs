//! Location API routes

use crate::error::ApiError;
use crate::services::LocationService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use marketplace_shared::types::{
    AutocompleteQuery, DistanceRequest, DistanceResponse, GeocodeRequest, GeocodedAddress,
    LocationSuggestion, ReverseGeocodeRequest,
};

/// Create location routes
pub fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/geocode", post(geocode))
        .route("/reverse-geocode", post(reverse_geocode))
        .route("/distance", post(distance))
        .route("/autocomplete", get(autocomplete))
}

/// POST /api/v1/location/geocode
async fn geocode(
    State(state): State<AppState>,
    Json(req): Json<GeocodeRequest>,
) -> Result<Json<GeocodedAddress>, ApiError> {
    let result = LocationService::geocode(state.geocoder(), &req.address).await?;
    Ok(Json(result))
}

/// POST /api/v1/location/reverse-geocode
async fn reverse_geocode(
    State(state): State<AppState>,
    Json(req): Json<ReverseGeocodeRequest>,
) -> Result<Json<GeocodedAddress>, ApiError> {
    let result =
        LocationService::reverse_geocode(state.geocoder(), req.latitude, req.longitude).await?;
    Ok(Json(result))
}

/// POST /api/v1/location/distance
async fn distance(Json(req): Json<DistanceRequest>) -> Result<Json<DistanceResponse>, ApiError> {
    let result = LocationService::distance(req.lat1, req.lon1, req.lat2, req.lon2)?;
    Ok(Json(result))
}

/// GET /api/v1/location/autocomplete?q=&limit=
async fn autocomplete(
    State(state): State<AppState>,
    Query(query): Query<AutocompleteQuery>,
) -> Result<Json<Vec<LocationSuggestion>>, ApiError> {
    let suggestions =
        LocationService::autocomplete(state.geocoder(), query.q.as_deref(), query.limit).await?;
    Ok(Json(suggestions))
}
