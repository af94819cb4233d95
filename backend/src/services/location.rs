//! Location service: geocoding, reverse geocoding, distance and autocomplete

use crate::error::ApiError;
use crate::services::geocoding::Geocoder;
use marketplace_shared::types::{DistanceResponse, GeocodedAddress, LocationSuggestion};
use marketplace_shared::validation::MAX_AUTOCOMPLETE_LIMIT;
use marketplace_shared::{distance_km, GeoPoint};

/// Location service for business logic
pub struct LocationService;

impl LocationService {
    /// Resolve a free-text address
    pub async fn geocode(geocoder: &dyn Geocoder, address: &str) -> Result<GeocodedAddress, ApiError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ApiError::invalid_field("address", "Address is required"));
        }

        geocoder
            .geocode(address)
            .await
            .map_err(|e| ApiError::from_geocoding(e, "address"))
    }

    /// Describe a coordinate
    pub async fn reverse_geocode(
        geocoder: &dyn Geocoder,
        latitude: f64,
        longitude: f64,
    ) -> Result<GeocodedAddress, ApiError> {
        let point = GeoPoint::new(latitude, longitude)?;

        geocoder
            .reverse_geocode(point)
            .await
            .map_err(|e| ApiError::from_geocoding(e, "latitude"))
    }

    /// Point-to-point distance in kilometers, rounded to two decimals
    pub fn distance(
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    ) -> Result<DistanceResponse, ApiError> {
        let from = GeoPoint::with_fields(lat1, lon1, "lat1", "lon1")?;
        let to = GeoPoint::with_fields(lat2, lon2, "lat2", "lon2")?;

        Ok(DistanceResponse {
            distance: distance_km(from, to),
            unit: "km".to_string(),
        })
    }

    /// Address suggestions for a partial query
    pub async fn autocomplete(
        geocoder: &dyn Geocoder,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<LocationSuggestion>, ApiError> {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ApiError::invalid_field("q", "Search query is required"))?;
        let limit = autocomplete_limit(limit);

        geocoder
            .autocomplete(query, limit)
            .await
            .map_err(|e| ApiError::from_geocoding(e, "q"))
    }
}

/// Default and cap at [`MAX_AUTOCOMPLETE_LIMIT`]; non-positive values fall back to one
fn autocomplete_limit(limit: Option<i64>) -> usize {
    limit
        .unwrap_or(MAX_AUTOCOMPLETE_LIMIT)
        .clamp(1, MAX_AUTOCOMPLETE_LIMIT) as usize
}
