//! API request and response types

use crate::models::{AvailabilitySlot, Listing};
use crate::pagination::PageSpec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// `?page=&limit=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageQuery {
    pub fn spec(&self) -> PageSpec {
        PageSpec::new(self.page, self.limit)
    }
}

// ============================================================================
// Listings
// ============================================================================

/// Availability slot as submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AvailabilitySlotRequest {
    #[validate(range(min = 0, max = 6, message = "Day of week must be between 0 and 6"))]
    pub day_of_week: i16,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// Create listing request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListingRequest {
    #[validate(length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"))]
    pub title: String,
    #[validate(length(
        min = 10,
        max = 2000,
        message = "Description must be between 10 and 2000 characters"
    ))]
    pub description: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub price: f64,
    pub price_type: String,
    #[serde(default)]
    pub currency: Option<String>,
    /// Free-text address, geocoded on create
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(default)]
    #[validate(range(min = 1, message = "Distance limit must be at least 1 km"))]
    pub distance_limit: Option<i32>,
    #[validate(length(min = 1, message = "At least one language is required"))]
    pub languages: Vec<String>,
    #[validate(length(min = 1, message = "At least one keyword is required"))]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlotRequest>,
}

/// Partial listing update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateListingRequest {
    #[validate(length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"))]
    pub title: Option<String>,
    #[validate(length(
        min = 10,
        max = 2000,
        message = "Description must be between 10 and 2000 characters"
    ))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price: Option<f64>,
    pub price_type: Option<String>,
    pub currency: Option<String>,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: Option<String>,
    #[validate(range(min = 1, message = "Distance limit must be at least 1 km"))]
    pub distance_limit: Option<i32>,
    #[validate(length(min = 1, message = "At least one language is required"))]
    pub languages: Option<Vec<String>>,
    #[validate(length(min = 1, message = "At least one keyword is required"))]
    pub keywords: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// `?q=&page=&limit=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `?lat=&lon=&radius_km=&page=&limit=`
///
/// Coordinates arrive as raw strings so that missing and malformed values
/// can be reported against the right field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub radius_km: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// A listing in a proximity result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub distance_km: f64,
}

/// Response for a newly added availability slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub listing_id: Uuid,
    pub slot: AvailabilitySlot,
}

// ============================================================================
// Location
// ============================================================================

/// Result of a forward or reverse geocode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedAddress {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
}

/// One autocomplete suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeRequest {
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseGeocodeRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceResponse {
    /// Kilometers, rounded to two decimals
    pub distance: f64,
    pub unit: String,
}

/// `?q=&limit=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutocompleteQuery {
    pub q: Option<String>,
    pub limit: Option<i64>,
}

// ============================================================================
// Favorites
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    Added,
    Removed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggleResponse {
    pub action: FavoriteAction,
    pub favorited: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteStatusResponse {
    pub listing_id: Uuid,
    pub favorited: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteCountResponse {
    pub listing_id: Uuid,
    pub count: i64,
}

/// A listing with its favorite count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopFavoritedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub favorite_count: i64,
}

/// `?limit=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopFavoritesQuery {
    pub limit: Option<i64>,
}

// ============================================================================
// Moderation
// ============================================================================

/// `text` is kept untyped so that numbers, arrays or `null` are answered as
/// "not prohibited" instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModerationCheckRequest {
    #[serde(default)]
    pub text: Option<serde_json::Value>,
}

impl ModerationCheckRequest {
    /// The text to check, if it is a string
    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationCheckResponse {
    pub prohibited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_listing_defaults() {
        let req: CreateListingRequest = serde_json::from_value(serde_json::json!({
            "title": "Gartenpflege",
            "description": "Rasen mähen und Hecken schneiden",
            "category": "garden",
            "price": 25.0,
            "price_type": "HOURLY",
            "location": "Berlin",
            "languages": ["de"],
            "keywords": ["garten"],
            "availability": [{ "day_of_week": 1, "start_time": "09:00", "end_time": "17:00" }]
        }))
        .unwrap();

        assert!(req.currency.is_none());
        assert!(req.distance_limit.is_none());
        assert!(req.availability[0].is_available);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_ignores_absent_fields() {
        let req = UpdateListingRequest::default();
        assert!(req.validate().is_ok());

        let req = UpdateListingRequest {
            title: Some("ab".to_string()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_page_query_spec() {
        let q = PageQuery { page: Some(2), limit: Some(500) };
        let spec = q.spec();
        assert_eq!(spec.page(), 2);
        assert_eq!(spec.limit(), 100);
    }

    #[test]
    fn test_favorite_action_serializes_lowercase() {
        let resp = FavoriteToggleResponse { action: FavoriteAction::Removed, favorited: false };
        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(json["action"], "removed");
        assert_eq!(json["favorited"], false);
    }

    #[test]
    fn test_error_response_omits_missing_field() {
        let resp = ErrorResponse {
            error: ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: "Listing not found".to_string(),
                field: None,
            },
        };
        let json = serde_json::to_value(resp).unwrap();
        assert!(json["error"].get("field").is_none());
    }

    #[test]
    fn test_moderation_request_ignores_non_string_text() {
        let req: ModerationCheckRequest = serde_json::from_str(r#"{"text": 42}"#).unwrap();
        assert_eq!(req.text(), None);

        let req: ModerationCheckRequest = serde_json::from_str(r#"{"text": "hallo"}"#).unwrap();
        assert_eq!(req.text(), Some("hallo"));

        let req: ModerationCheckRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text(), None);
    }
}
