//! Geocoding via the Photon API
//!
//! [`Geocoder`] is the seam the listing and location services depend on.
//! [`PhotonGeocoder`] talks to a Photon instance over HTTP; [`CachedGeocoder`]
//! wraps any geocoder with a Redis cache for forward lookups.

use crate::config::GeocodingConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use marketplace_shared::types::{GeocodedAddress, LocationSuggestion};
use marketplace_shared::validation::MAX_AUTOCOMPLETE_LIMIT;
use marketplace_shared::{GeoPoint, GeocodingError};
use redis::aio::ConnectionManager;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Address lookup provider
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a free-text address to its best match
    async fn geocode(&self, address: &str) -> Result<GeocodedAddress, GeocodingError>;

    /// Describe a point. Falls back to `"<lat>, <lon>"` when nothing matches.
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<GeocodedAddress, GeocodingError>;

    /// Suggestions for a partial query, at most `limit` of them
    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LocationSuggestion>, GeocodingError>;
}

// ============================================================================
// Photon wire format (GeoJSON)
// ============================================================================

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    #[serde(default)]
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[longitude, latitude]`
    coordinates: [f64; 2],
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    name: Option<String>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl Feature {
    /// Range-checked point; out-of-range provider data is a provider error
    fn point(&self) -> Result<GeoPoint, GeocodingError> {
        let [longitude, latitude] = self.geometry.coordinates;
        GeoPoint::new(latitude, longitude)
            .map_err(|e| GeocodingError::Provider(format!("invalid Photon coordinates: {e}")))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// `name, street, city, state, country`, skipping missing parts
fn format_address(props: &Properties) -> String {
    [
        &props.name,
        &props.street,
        &props.city,
        &props.state,
        &props.country,
    ]
    .into_iter()
    .filter_map(non_empty)
    .collect::<Vec<_>>()
    .join(", ")
}

fn coordinates_label(point: GeoPoint) -> String {
    format!("{}, {}", point.latitude, point.longitude)
}

// ============================================================================
// Photon client
// ============================================================================

/// HTTP client for a Photon instance
#[derive(Clone)]
pub struct PhotonGeocoder {
    client: Client,
    base_url: String,
}

impl PhotonGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("failed to build geocoding HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `Ok(None)` when Photon answers 404
    async fn fetch(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<FeatureCollection>, GeocodingError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| GeocodingError::Provider(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if !status.is_success() => Err(GeocodingError::Provider(format!(
                "Photon returned {status}"
            ))),
            _ => response
                .json::<FeatureCollection>()
                .await
                .map(Some)
                .map_err(|e| GeocodingError::Provider(format!("invalid Photon response: {e}"))),
        }
    }
}

#[async_trait]
impl Geocoder for PhotonGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeocodedAddress, GeocodingError> {
        let query = [("q", address.to_string()), ("limit", "1".to_string())];
        let result = self.fetch("/api", &query).await;
        if let Err(ref e) = result {
            error!(error = %e, "Photon geocoding failed");
        }

        let feature = result?
            .and_then(|fc| fc.features.into_iter().next())
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let point = feature.point().map_err(|e| {
            error!(error = %e, "Photon geocoding failed");
            e
        })?;
        let formatted = format_address(&feature.properties);
        let formatted_address = if formatted.is_empty() {
            address.to_string()
        } else {
            formatted
        };

        debug!(latitude = point.latitude, longitude = point.longitude, "Address geocoded");
        Ok(GeocodedAddress {
            latitude: point.latitude,
            longitude: point.longitude,
            formatted_address,
        })
    }

    async fn reverse_geocode(&self, point: GeoPoint) -> Result<GeocodedAddress, GeocodingError> {
        let query = [
            ("lat", point.latitude.to_string()),
            ("lon", point.longitude.to_string()),
            ("limit", "1".to_string()),
        ];
        let result = self.fetch("/reverse", &query).await;
        if let Err(ref e) = result {
            error!(error = %e, "Photon reverse geocoding failed");
        }

        let formatted_address = result?
            .and_then(|fc| fc.features.into_iter().next())
            .map(|f| format_address(&f.properties))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| coordinates_label(point));

        Ok(GeocodedAddress {
            latitude: point.latitude,
            longitude: point.longitude,
            formatted_address,
        })
    }

    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LocationSuggestion>, GeocodingError> {
        let limit = limit.clamp(1, MAX_AUTOCOMPLETE_LIMIT as usize);
        let params = [("q", query.to_string()), ("limit", limit.to_string())];
        let result = self.fetch("/api", &params).await;
        if let Err(ref e) = result {
            error!(error = %e, "Photon autocomplete failed");
        }

        let features = result?.map(|fc| fc.features).unwrap_or_default();
        // Suggestions with unusable coordinates are dropped
        Ok(features
            .into_iter()
            .filter_map(|f| f.point().ok().map(|point| (f, point)))
            .take(limit)
            .map(|(f, point)| LocationSuggestion {
                name: non_empty(&f.properties.name).unwrap_or(query).to_string(),
                city: non_empty(&f.properties.city).map(str::to_string),
                state: non_empty(&f.properties.state).map(str::to_string),
                country: non_empty(&f.properties.country).map(str::to_string),
                latitude: point.latitude,
                longitude: point.longitude,
                formatted_address: format_address(&f.properties),
            })
            .collect())
    }
}

// ============================================================================
// Redis cache
// ============================================================================

/// Caches forward geocodes in Redis.
///
/// Cache failures are logged and skipped; they never fail a lookup. Misses
/// (`AddressNotFound`) and provider errors are not cached.
pub struct CachedGeocoder {
    inner: Arc<dyn Geocoder>,
    redis: ConnectionManager,
    ttl_secs: u64,
}

impl CachedGeocoder {
    pub fn new(inner: Arc<dyn Geocoder>, redis: ConnectionManager, ttl_secs: u64) -> Self {
        Self {
            inner,
            redis,
            ttl_secs,
        }
    }

    fn cache_key(address: &str) -> String {
        format!("geocode:v1:{}", address.trim().to_lowercase())
    }

    async fn read(&self, key: &str) -> Option<GeocodedAddress> {
        let mut conn = self.redis.clone();
        let cached: Option<String> = match redis::cmd("GET").arg(key).query_async(&mut conn).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Geocode cache read failed");
                return None;
            }
        };
        cached.and_then(|json| serde_json::from_str(&json).ok())
    }

    async fn write(&self, key: &str, value: &GeocodedAddress) {
        let Ok(json) = serde_json::to_string(value) else {
            return;
        };
        let mut conn = self.redis.clone();
        let result: redis::RedisResult<()> = redis::cmd("SET")
            .arg(key)
            .arg(json)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async(&mut conn)
            .await;
        if let Err(e) = result {
            warn!(error = %e, "Geocode cache write failed");
        }
    }
}

#[async_trait]
impl Geocoder for CachedGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeocodedAddress, GeocodingError> {
        let key = Self::cache_key(address);
        if let Some(hit) = self.read(&key).await {
            debug!("Geocode cache hit");
            return Ok(hit);
        }

        let resolved = self.inner.geocode(address).await?;
        self.write(&key, &resolved).await;
        Ok(resolved)
    }

    async fn reverse_geocode(&self, point: GeoPoint) -> Result<GeocodedAddress, GeocodingError> {
        self.inner.reverse_geocode(point).await
    }

    async fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<LocationSuggestion>, GeocodingError> {
        self.inner.autocomplete(query, limit).await
    }
}

/// Connect to Redis, returning `None` (caching disabled) on any failure
pub async fn connect_cache(url: &str) -> Option<ConnectionManager> {
    let client = match redis::Client::open(url) {
        Ok(client) => client,
        Err(e) => {
            warn!("Invalid Redis URL: {}. Geocode caching will be disabled.", e);
            return None;
        }
    };

    match ConnectionManager::new(client).await {
        Ok(conn) => Some(conn),
        Err(e) => {
            warn!("Failed to connect to Redis: {}. Geocode caching will be disabled.", e);
            None
        }
    }
}
