//! Favorite repository for database operations

use super::listing::ListingRecord;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Favorite record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FavoriteRecord {
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Listing row joined with its favorite count
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FavoritedListingRecord {
    #[sqlx(flatten)]
    pub listing: ListingRecord,
    pub favorite_count: i64,
}

/// Favorite repository
pub struct FavoriteRepository;

impl FavoriteRepository {
    /// Add a favorite. Returns `None` when it already existed.
    pub async fn add(pool: &PgPool, user_id: Uuid, listing_id: Uuid) -> Result<Option<FavoriteRecord>> {
        let record = sqlx::query_as::<_, FavoriteRecord>(
            r#"
            INSERT INTO favorites (user_id, listing_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, listing_id) DO NOTHING
            RETURNING user_id, listing_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(listing_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Remove a favorite. Returns `false` when there was none.
    pub async fn remove(pool: &PgPool, user_id: Uuid, listing_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND listing_id = $2")
            .bind(user_id)
            .bind(listing_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(pool: &PgPool, user_id: Uuid, listing_id: Uuid) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND listing_id = $2)",
        )
        .bind(user_id)
        .bind(listing_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// A user's favorited listings, most recently favorited first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ListingRecord>, i64)> {
        let records = sqlx::query_as::<_, ListingRecord>(
            r#"
            SELECT l.id, l.owner_id, l.title, l.description, l.category, l.subcategory,
                   l.price, l.price_type, l.currency, l.location, l.latitude, l.longitude,
                   l.distance_limit, l.languages, l.keywords, l.is_active,
                   l.created_at, l.updated_at
            FROM favorites f
            JOIN listings l ON l.id = f.listing_id
            WHERE f.user_id = $1
            ORDER BY f.created_at DESC, l.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

        Ok((records, total))
    }

    pub async fn count_for_listing(pool: &PgPool, listing_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE listing_id = $1")
            .bind(listing_id)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Most favorited active listings; ties broken by listing id
    pub async fn top(pool: &PgPool, limit: i64) -> Result<Vec<FavoritedListingRecord>> {
        let records = sqlx::query_as::<_, FavoritedListingRecord>(
            r#"
            SELECT l.id, l.owner_id, l.title, l.description, l.category, l.subcategory,
                   l.price, l.price_type, l.currency, l.location, l.latitude, l.longitude,
                   l.distance_limit, l.languages, l.keywords, l.is_active,
                   l.created_at, l.updated_at,
                   COUNT(f.user_id) AS favorite_count
            FROM favorites f
            JOIN listings l ON l.id = f.listing_id
            WHERE l.is_active
            GROUP BY l.id
            ORDER BY favorite_count DESC, l.id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
