//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod favorite;
pub mod geocoding;
pub mod listing;
pub mod location;
pub mod moderation;

pub use favorite::FavoriteService;
pub use geocoding::{CachedGeocoder, Geocoder, PhotonGeocoder};
pub use listing::ListingService;
pub use location::LocationService;
pub use moderation::ModerationService;
