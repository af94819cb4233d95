//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod favorite;
pub mod listing;
pub mod user;

pub use favorite::{FavoriteRecord, FavoriteRepository, FavoritedListingRecord};
pub use listing::{
    AvailabilityRecord, CreateAvailability, CreateListing, ListingRecord, ListingRepository,
    UpdateListing,
};
pub use user::UserRepository;
