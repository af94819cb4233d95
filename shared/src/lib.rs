//! Marketplace Shared Library
//!
//! Pure domain logic used by the backend: content moderation, proximity
//! search, pagination, request/response types and field validation.
//! Nothing in this crate performs I/O.

pub mod errors;
pub mod geo;
pub mod models;
pub mod moderation;
pub mod pagination;
pub mod types;
pub mod validation;
pub mod wordlist;

// Re-export commonly used items
pub use errors::*;
pub use geo::{
    distance_km, find_nearby, haversine_km, BoundingBox, GeoPoint, Geotagged, Nearby,
    DEFAULT_RADIUS_KM, EARTH_RADIUS_KM,
};
pub use models::{AccountType, AvailabilitySlot, Favorite, Listing, PriceType};
pub use moderation::{BlockReason, ContentModerator, KeywordFilter, ModerationVerdict, ProfanityFilter};
pub use pagination::{Page, PageSpec, Pagination};
