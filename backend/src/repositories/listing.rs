//! Listing repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use marketplace_shared::BoundingBox;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Columns selected for every listing query, in [`ListingRecord`] order
const LISTING_COLUMNS: &str = r#"
    l.id, l.owner_id, l.title, l.description, l.category, l.subcategory,
    l.price, l.price_type, l.currency, l.location, l.latitude, l.longitude,
    l.distance_limit, l.languages, l.keywords, l.is_active,
    l.created_at, l.updated_at
"#;

/// Listing record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ListingRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub price: Decimal,
    pub price_type: String,
    pub currency: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance_limit: Option<i32>,
    pub languages: Vec<String>,
    pub keywords: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Availability slot record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AvailabilityRecord {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub day_of_week: i16,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

/// Input for creating a listing
#[derive(Debug, Clone)]
pub struct CreateListing {
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub price: Decimal,
    pub price_type: String,
    pub currency: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_limit: Option<i32>,
    pub languages: Vec<String>,
    pub keywords: Vec<String>,
}

/// Input for an availability slot
#[derive(Debug, Clone)]
pub struct CreateAvailability {
    pub day_of_week: i16,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

/// Input for updating a listing; `None` leaves a column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateListing {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price: Option<Decimal>,
    pub price_type: Option<String>,
    pub currency: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance_limit: Option<i32>,
    pub languages: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Escape `%`, `_` and `\` for use inside an `ILIKE` pattern
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Listing repository
pub struct ListingRepository;

impl ListingRepository {
    /// Insert a listing and its availability slots in one transaction
    pub async fn create(
        pool: &PgPool,
        input: CreateListing,
        slots: &[CreateAvailability],
    ) -> Result<(ListingRecord, Vec<AvailabilityRecord>)> {
        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, ListingRecord>(&format!(
            r#"
            INSERT INTO listings AS l (
                owner_id, title, description, category, subcategory,
                price, price_type, currency, location, latitude, longitude,
                distance_limit, languages, keywords
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {LISTING_COLUMNS}
            "#
        ))
        .bind(input.owner_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(&input.subcategory)
        .bind(input.price)
        .bind(&input.price_type)
        .bind(&input.currency)
        .bind(&input.location)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(input.distance_limit)
        .bind(&input.languages)
        .bind(&input.keywords)
        .fetch_one(&mut *tx)
        .await?;

        let mut availability = Vec::with_capacity(slots.len());
        for slot in slots {
            let row = sqlx::query_as::<_, AvailabilityRecord>(
                r#"
                INSERT INTO listing_availability (listing_id, day_of_week, start_time, end_time, is_available)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, listing_id, day_of_week, start_time, end_time, is_available
                "#,
            )
            .bind(record.id)
            .bind(slot.day_of_week)
            .bind(&slot.start_time)
            .bind(&slot.end_time)
            .bind(slot.is_available)
            .fetch_one(&mut *tx)
            .await?;
            availability.push(row);
        }

        tx.commit().await?;
        Ok((record, availability))
    }

    /// Get a listing by ID, active or not
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ListingRecord>> {
        let record = sqlx::query_as::<_, ListingRecord>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings l WHERE l.id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Availability slots for a set of listings, ordered by day then start time
    pub async fn availability_for(
        pool: &PgPool,
        listing_ids: &[Uuid],
    ) -> Result<Vec<AvailabilityRecord>> {
        if listing_ids.is_empty() {
            return Ok(Vec::new());
        }

        let records = sqlx::query_as::<_, AvailabilityRecord>(
            r#"
            SELECT id, listing_id, day_of_week, start_time, end_time, is_available
            FROM listing_availability
            WHERE listing_id = ANY($1)
            ORDER BY day_of_week, start_time, created_at
            "#,
        )
        .bind(listing_ids)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Append one availability slot
    pub async fn add_availability(
        pool: &PgPool,
        listing_id: Uuid,
        slot: &CreateAvailability,
    ) -> Result<AvailabilityRecord> {
        let record = sqlx::query_as::<_, AvailabilityRecord>(
            r#"
            INSERT INTO listing_availability (listing_id, day_of_week, start_time, end_time, is_available)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, listing_id, day_of_week, start_time, end_time, is_available
            "#,
        )
        .bind(listing_id)
        .bind(slot.day_of_week)
        .bind(&slot.start_time)
        .bind(&slot.end_time)
        .bind(slot.is_available)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Apply a partial update
    pub async fn update(pool: &PgPool, id: Uuid, input: UpdateListing) -> Result<Option<ListingRecord>> {
        let record = sqlx::query_as::<_, ListingRecord>(&format!(
            r#"
            UPDATE listings AS l SET
                title = COALESCE($2, l.title),
                description = COALESCE($3, l.description),
                category = COALESCE($4, l.category),
                subcategory = COALESCE($5, l.subcategory),
                price = COALESCE($6, l.price),
                price_type = COALESCE($7, l.price_type),
                currency = COALESCE($8, l.currency),
                location = COALESCE($9, l.location),
                latitude = COALESCE($10, l.latitude),
                longitude = COALESCE($11, l.longitude),
                distance_limit = COALESCE($12, l.distance_limit),
                languages = COALESCE($13, l.languages),
                keywords = COALESCE($14, l.keywords),
                is_active = COALESCE($15, l.is_active),
                updated_at = NOW()
            WHERE l.id = $1
            RETURNING {LISTING_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(&input.subcategory)
        .bind(input.price)
        .bind(&input.price_type)
        .bind(&input.currency)
        .bind(&input.location)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(input.distance_limit)
        .bind(&input.languages)
        .bind(&input.keywords)
        .bind(input.is_active)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a listing; availability and favorites cascade
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Active listings, newest first
    pub async fn list_active(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ListingRecord>, i64)> {
        let records = sqlx::query_as::<_, ListingRecord>(&format!(
            r#"
            SELECT {LISTING_COLUMNS} FROM listings l
            WHERE l.is_active
            ORDER BY l.created_at DESC, l.id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM listings WHERE is_active")
            .fetch_one(pool)
            .await?;

        Ok((records, total))
    }

    /// All listings of one owner, including inactive ones
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ListingRecord>, i64)> {
        let records = sqlx::query_as::<_, ListingRecord>(&format!(
            r#"
            SELECT {LISTING_COLUMNS} FROM listings l
            WHERE l.owner_id = $1
            ORDER BY l.created_at DESC, l.id
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM listings WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(pool)
            .await?;

        Ok((records, total))
    }

    /// Active listings in a category (case-insensitive)
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ListingRecord>, i64)> {
        let records = sqlx::query_as::<_, ListingRecord>(&format!(
            r#"
            SELECT {LISTING_COLUMNS} FROM listings l
            WHERE l.is_active AND LOWER(l.category) = LOWER($1)
            ORDER BY l.created_at DESC, l.id
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM listings WHERE is_active AND LOWER(category) = LOWER($1)",
        )
        .bind(category)
        .fetch_one(pool)
        .await?;

        Ok((records, total))
    }

    /// Active listings whose title or description contains `query`
    /// (case-insensitive) or whose keywords include it exactly.
    ///
    /// Keywords are stored lowercased.
    pub async fn search(
        pool: &PgPool,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ListingRecord>, i64)> {
        let pattern = like_pattern(query);
        let keyword = query.to_lowercase();

        let records = sqlx::query_as::<_, ListingRecord>(&format!(
            r#"
            SELECT {LISTING_COLUMNS} FROM listings l
            WHERE l.is_active
              AND (l.title ILIKE $1 OR l.description ILIKE $1 OR $2 = ANY(l.keywords))
            ORDER BY l.created_at DESC, l.id
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(&pattern)
        .bind(&keyword)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM listings l
            WHERE l.is_active
              AND (l.title ILIKE $1 OR l.description ILIKE $1 OR $2 = ANY(l.keywords))
            "#,
        )
        .bind(&pattern)
        .bind(&keyword)
        .fetch_one(pool)
        .await?;

        Ok((records, total))
    }

    /// Active, geocoded listings inside a bounding box, newest first.
    ///
    /// The box is only a prefilter; callers run the exact distance check.
    pub async fn nearby_candidates(
        pool: &PgPool,
        bbox: &BoundingBox,
        max_rows: i64,
    ) -> Result<Vec<ListingRecord>> {
        let records = sqlx::query_as::<_, ListingRecord>(&format!(
            r#"
            SELECT {LISTING_COLUMNS} FROM listings l
            WHERE l.is_active
              AND l.latitude IS NOT NULL AND l.longitude IS NOT NULL
              AND l.latitude BETWEEN $1 AND $2
              AND l.longitude BETWEEN $3 AND $4
            ORDER BY l.created_at DESC, l.id
            LIMIT $5
            "#
        ))
        .bind(bbox.min_lat)
        .bind(bbox.max_lat)
        .bind(bbox.min_lon)
        .bind(bbox.max_lon)
        .bind(max_rows)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
