//! Favorites service

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{FavoriteRepository, ListingRepository, UserRepository};
use crate::services::listing::{attach_availability, to_listing};
use marketplace_shared::types::{FavoriteAction, FavoriteToggleResponse, TopFavoritedListing};
use marketplace_shared::{Favorite, Listing, Page, PageSpec};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// Bounds for the top-favorited limit
pub const TOP_MIN_LIMIT: i64 = 1;
pub const TOP_MAX_LIMIT: i64 = 100;
const TOP_DEFAULT_LIMIT: i64 = 10;

/// Favorites service for business logic
pub struct FavoriteService;

impl FavoriteService {
    /// Save a listing for a user
    pub async fn add(pool: &PgPool, user: &AuthUser, listing_id: Uuid) -> Result<Favorite, ApiError> {
        let user_id = user.user_id;
        Self::require_listing(pool, listing_id).await?;
        UserRepository::ensure(pool, user_id, user.account_type).await?;

        let record = FavoriteRepository::add(pool, user_id, listing_id)
            .await?
            .ok_or_else(|| ApiError::Conflict("Listing is already in favorites".to_string()))?;
        debug!(user_id = %user_id, listing_id = %listing_id, "Favorite added");

        Ok(Favorite {
            user_id: record.user_id,
            listing_id: record.listing_id,
            created_at: record.created_at,
        })
    }

    /// Remove a saved listing
    pub async fn remove(pool: &PgPool, user_id: Uuid, listing_id: Uuid) -> Result<(), ApiError> {
        if !FavoriteRepository::remove(pool, user_id, listing_id).await? {
            return Err(ApiError::NotFound("Favorite not found".to_string()));
        }
        debug!(user_id = %user_id, listing_id = %listing_id, "Favorite removed");
        Ok(())
    }

    /// Flip the favorite state
    pub async fn toggle(
        pool: &PgPool,
        user: &AuthUser,
        listing_id: Uuid,
    ) -> Result<FavoriteToggleResponse, ApiError> {
        let user_id = user.user_id;
        if FavoriteRepository::remove(pool, user_id, listing_id).await? {
            return Ok(FavoriteToggleResponse {
                action: FavoriteAction::Removed,
                favorited: false,
            });
        }

        Self::require_listing(pool, listing_id).await?;
        UserRepository::ensure(pool, user_id, user.account_type).await?;
        // A concurrent add between the delete and this insert still leaves it favorited
        FavoriteRepository::add(pool, user_id, listing_id).await?;

        Ok(FavoriteToggleResponse {
            action: FavoriteAction::Added,
            favorited: true,
        })
    }

    pub async fn is_favorited(
        pool: &PgPool,
        user_id: Uuid,
        listing_id: Uuid,
    ) -> Result<bool, ApiError> {
        Ok(FavoriteRepository::exists(pool, user_id, listing_id).await?)
    }

    /// A user's favorites, most recently saved first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        page: &PageSpec,
    ) -> Result<Page<Listing>, ApiError> {
        let (records, total) =
            FavoriteRepository::list_for_user(pool, user_id, page.limit().into(), page.offset())
                .await?;
        let listings = attach_availability(pool, records).await?;
        Ok(Page::new(listings, page, total.max(0) as u64))
    }

    pub async fn count_for_listing(pool: &PgPool, listing_id: Uuid) -> Result<i64, ApiError> {
        Self::require_listing(pool, listing_id).await?;
        Ok(FavoriteRepository::count_for_listing(pool, listing_id).await?)
    }

    /// Most favorited active listings
    pub async fn top(pool: &PgPool, limit: Option<i64>) -> Result<Vec<TopFavoritedListing>, ApiError> {
        let limit = check_top_limit(limit)?;

        FavoriteRepository::top(pool, limit)
            .await?
            .into_iter()
            .map(|row| -> Result<TopFavoritedListing, ApiError> {
                Ok(TopFavoritedListing {
                    listing: to_listing(row.listing, Vec::new())?,
                    favorite_count: row.favorite_count,
                })
            })
            .collect()
    }

    async fn require_listing(pool: &PgPool, listing_id: Uuid) -> Result<(), ApiError> {
        ListingRepository::find_by_id(pool, listing_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound("Listing not found".to_string()))
    }
}

fn check_top_limit(limit: Option<i64>) -> Result<i64, ApiError> {
    let limit = limit.unwrap_or(TOP_DEFAULT_LIMIT);
    if !(TOP_MIN_LIMIT..=TOP_MAX_LIMIT).contains(&limit) {
        return Err(ApiError::invalid_field(
            "limit",
            format!("Limit must be between {TOP_MIN_LIMIT} and {TOP_MAX_LIMIT}"),
        ));
    }
    Ok(limit)
}
