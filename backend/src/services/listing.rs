//! Listing service
//!
//! Provides business logic for service listings:
//! - Validation and content moderation of submitted text
//! - Geocoding of the free-text location
//! - Ownership checks on writes
//! - Proximity search over geocoded listings

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{
    AvailabilityRecord, CreateAvailability, CreateListing, ListingRecord, ListingRepository,
    UpdateListing, UserRepository,
};
use crate::services::moderation::ModerationService;
use crate::state::AppState;
use marketplace_shared::geo::{round_km, validate_radius};
use marketplace_shared::types::{
    AvailabilitySlotRequest, CreateListingRequest, NearbyListing, NearbyQuery,
    UpdateListingRequest,
};
use marketplace_shared::validation::{
    validate_availability_slot, validate_create_listing, validate_update_listing,
};
use marketplace_shared::{
    find_nearby, AvailabilitySlot, BoundingBox, GeoError, GeoPoint, Listing, Page, PageSpec,
    PriceType,
};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::HashMap;
use tracing::{info, warn};
use uuid::Uuid;

const DEFAULT_CURRENCY: &str = "EUR";

/// Listing service for business logic
pub struct ListingService;

impl ListingService {
    /// Create a listing owned by the caller.
    ///
    /// Everything that can reject the request (validation, moderation,
    /// geocoding) runs before the database is touched.
    pub async fn create(
        state: &AppState,
        owner: &AuthUser,
        req: CreateListingRequest,
    ) -> Result<Listing, ApiError> {
        let owner_id = owner.user_id;
        let price_type = validate_create_listing(&req)?;

        ModerationService::ensure_allowed(state.moderator(), "title", &req.title)?;
        ModerationService::ensure_allowed(state.moderator(), "description", &req.description)?;

        let geocoded = state
            .geocoder()
            .geocode(req.location.trim())
            .await
            .map_err(|e| ApiError::from_geocoding(e, "location"))?;

        let input = CreateListing {
            owner_id,
            title: req.title.trim().to_string(),
            description: req.description.trim().to_string(),
            category: req.category.trim().to_string(),
            subcategory: req.subcategory.map(|s| s.trim().to_string()),
            price: to_decimal(req.price)?,
            price_type: price_type.as_str().to_string(),
            currency: normalize_currency(req.currency.as_deref()),
            location: geocoded.formatted_address,
            latitude: geocoded.latitude,
            longitude: geocoded.longitude,
            distance_limit: req.distance_limit,
            languages: req.languages,
            keywords: normalize_keywords(req.keywords),
        };
        let slots: Vec<CreateAvailability> = req.availability.iter().map(to_slot_input).collect();

        UserRepository::ensure(state.db(), owner_id, owner.account_type).await?;
        let (record, availability) = ListingRepository::create(state.db(), input, &slots).await?;
        info!(listing_id = %record.id, owner_id = %owner_id, "Listing created");

        to_listing(record, availability.into_iter().map(to_slot).collect())
    }

    /// Get a listing with its availability
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Listing, ApiError> {
        let record = ListingRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Listing not found".to_string()))?;

        let availability = ListingRepository::availability_for(pool, &[id]).await?;
        to_listing(record, availability.into_iter().map(to_slot).collect())
    }

    /// Apply a partial update. Only the owner may update.
    pub async fn update(
        state: &AppState,
        id: Uuid,
        user_id: Uuid,
        req: UpdateListingRequest,
    ) -> Result<Listing, ApiError> {
        Self::require_owner(state.db(), id, user_id).await?;

        let price_type = validate_update_listing(&req)?;

        if let Some(ref title) = req.title {
            ModerationService::ensure_allowed(state.moderator(), "title", title)?;
        }
        if let Some(ref description) = req.description {
            ModerationService::ensure_allowed(state.moderator(), "description", description)?;
        }

        let mut patch = UpdateListing {
            title: req.title.map(|s| s.trim().to_string()),
            description: req.description.map(|s| s.trim().to_string()),
            category: req.category.map(|s| s.trim().to_string()),
            subcategory: req.subcategory.map(|s| s.trim().to_string()),
            price: req.price.map(to_decimal).transpose()?,
            price_type: price_type.map(|p| p.as_str().to_string()),
            currency: req.currency.as_deref().map(|c| normalize_currency(Some(c))),
            distance_limit: req.distance_limit,
            languages: req.languages,
            keywords: req.keywords.map(normalize_keywords),
            is_active: req.is_active,
            ..Default::default()
        };

        if let Some(ref location) = req.location {
            let geocoded = state
                .geocoder()
                .geocode(location.trim())
                .await
                .map_err(|e| ApiError::from_geocoding(e, "location"))?;
            patch.location = Some(geocoded.formatted_address);
            patch.latitude = Some(geocoded.latitude);
            patch.longitude = Some(geocoded.longitude);
        }

        let record = ListingRepository::update(state.db(), id, patch)
            .await?
            .ok_or_else(|| ApiError::NotFound("Listing not found".to_string()))?;
        info!(listing_id = %id, "Listing updated");

        let availability = ListingRepository::availability_for(state.db(), &[id]).await?;
        to_listing(record, availability.into_iter().map(to_slot).collect())
    }

    /// Delete a listing. Only the owner may delete.
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        Self::require_owner(pool, id, user_id).await?;

        if !ListingRepository::delete(pool, id).await? {
            return Err(ApiError::NotFound("Listing not found".to_string()));
        }
        info!(listing_id = %id, "Listing deleted");
        Ok(())
    }

    /// Add an availability slot. Only the owner may add slots.
    pub async fn add_availability(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        slot: AvailabilitySlotRequest,
    ) -> Result<AvailabilitySlot, ApiError> {
        validate_availability_slot(&slot)?;
        Self::require_owner(pool, id, user_id).await?;

        let record = ListingRepository::add_availability(pool, id, &to_slot_input(&slot)).await?;
        Ok(to_slot(record))
    }

    /// Active listings, newest first
    pub async fn list_active(pool: &PgPool, page: &PageSpec) -> Result<Page<Listing>, ApiError> {
        let (records, total) =
            ListingRepository::list_active(pool, page.limit().into(), page.offset()).await?;
        Self::into_page(pool, records, total, page).await
    }

    /// Listings of one owner, including inactive ones
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: Uuid,
        page: &PageSpec,
    ) -> Result<Page<Listing>, ApiError> {
        let (records, total) =
            ListingRepository::list_by_owner(pool, owner_id, page.limit().into(), page.offset())
                .await?;
        Self::into_page(pool, records, total, page).await
    }

    /// Active listings in a category
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
        page: &PageSpec,
    ) -> Result<Page<Listing>, ApiError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(ApiError::invalid_field("category", "Category is required"));
        }

        let (records, total) =
            ListingRepository::list_by_category(pool, category, page.limit().into(), page.offset())
                .await?;
        Self::into_page(pool, records, total, page).await
    }

    /// Free-text search over title, description and keywords
    pub async fn search(
        pool: &PgPool,
        query: Option<&str>,
        page: &PageSpec,
    ) -> Result<Page<Listing>, ApiError> {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ApiError::invalid_field("q", "Search query is required"))?;

        let (records, total) =
            ListingRepository::search(pool, query, page.limit().into(), page.offset()).await?;
        Self::into_page(pool, records, total, page).await
    }

    /// Active listings within `radius_km` of a point.
    ///
    /// Candidates come from a bounding-box query capped at
    /// `search.max_candidates`; the exact haversine filter and pagination run
    /// in memory over that snapshot, preserving its newest-first order.
    pub async fn nearby(state: &AppState, query: NearbyQuery) -> Result<Page<NearbyListing>, ApiError> {
        let center = GeoPoint::parse(query.lat.as_deref(), query.lon.as_deref(), "lat", "lon")?;
        let radius_km = parse_radius(query.radius_km.as_deref(), state.config().search.default_radius_km)?;
        let page = PageSpec::new(query.page, query.limit);

        let bbox = BoundingBox::around(center, radius_km);
        let max_candidates = state.config().search.max_candidates;
        let records = ListingRepository::nearby_candidates(state.db(), &bbox, max_candidates).await?;
        if candidates_truncated(records.len(), max_candidates) {
            warn!(
                max_candidates,
                lat = center.latitude,
                lon = center.longitude,
                radius_km,
                "Nearby candidates hit the cap; total may be under-reported"
            );
        }

        let listings = records
            .into_iter()
            .map(|record| to_listing(record, Vec::new()))
            .collect::<Result<Vec<_>, _>>()?;

        let found = find_nearby(center, radius_km, &page, listings)?;

        let ids: Vec<Uuid> = found.items.iter().map(|hit| hit.item.id).collect();
        let mut slots = group_slots(ListingRepository::availability_for(state.db(), &ids).await?);

        Ok(found.map(|hit| {
            let mut listing = hit.item;
            listing.availability = slots.remove(&listing.id).unwrap_or_default();
            NearbyListing {
                listing,
                distance_km: round_km(hit.distance_km),
            }
        }))
    }

    async fn require_owner(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<ListingRecord, ApiError> {
        let record = ListingRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Listing not found".to_string()))?;

        if record.owner_id != user_id {
            return Err(ApiError::Forbidden(
                "Only the owner can modify this listing".to_string(),
            ));
        }
        Ok(record)
    }

    async fn into_page(
        pool: &PgPool,
        records: Vec<ListingRecord>,
        total: i64,
        page: &PageSpec,
    ) -> Result<Page<Listing>, ApiError> {
        let listings = attach_availability(pool, records).await?;
        Ok(Page::new(listings, page, total.max(0) as u64))
    }
}

/// Convert records to listings with their availability loaded in one query
pub(crate) async fn attach_availability(
    pool: &PgPool,
    records: Vec<ListingRecord>,
) -> Result<Vec<Listing>, ApiError> {
    let ids: Vec<Uuid> = records.iter().map(|r| r.id).collect();
    let mut slots = group_slots(ListingRepository::availability_for(pool, &ids).await?);

    records
        .into_iter()
        .map(|record| {
            let availability = slots.remove(&record.id).unwrap_or_default();
            to_listing(record, availability)
        })
        .collect()
}

fn group_slots(records: Vec<AvailabilityRecord>) -> HashMap<Uuid, Vec<AvailabilitySlot>> {
    let mut grouped: HashMap<Uuid, Vec<AvailabilitySlot>> = HashMap::new();
    for record in records {
        grouped.entry(record.listing_id).or_default().push(to_slot(record));
    }
    grouped
}

/// Parse the optional radius parameter, falling back to `default_km`
/// The candidate query returned as many rows as it was allowed to
fn candidates_truncated(found: usize, max_candidates: i64) -> bool {
    i64::try_from(found).is_ok_and(|found| found >= max_candidates)
}

fn parse_radius(raw: Option<&str>, default_km: f64) -> Result<f64, GeoError> {
    let radius = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => default_km,
        Some(s) => s.parse::<f64>().map_err(|_| GeoError::NotANumber {
            field: "radius_km",
            value: s.to_string(),
        })?,
    };
    validate_radius("radius_km", radius)
}

pub(crate) fn to_listing(
    record: ListingRecord,
    availability: Vec<AvailabilitySlot>,
) -> Result<Listing, ApiError> {
    let price_type: PriceType = record
        .price_type
        .parse()
        .map_err(|e: String| ApiError::Internal(anyhow::anyhow!(e)))?;

    Ok(Listing {
        id: record.id,
        owner_id: record.owner_id,
        title: record.title,
        description: record.description,
        category: record.category,
        subcategory: record.subcategory,
        price: record.price.to_f64().unwrap_or_default(),
        price_type,
        currency: record.currency.trim().to_string(),
        location: record.location,
        latitude: record.latitude,
        longitude: record.longitude,
        distance_limit: record.distance_limit,
        languages: record.languages,
        keywords: record.keywords,
        is_active: record.is_active,
        availability,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

fn to_slot(record: AvailabilityRecord) -> AvailabilitySlot {
    AvailabilitySlot {
        id: record.id,
        day_of_week: record.day_of_week,
        start_time: record.start_time,
        end_time: record.end_time,
        is_available: record.is_available,
    }
}

fn to_slot_input(slot: &AvailabilitySlotRequest) -> CreateAvailability {
    CreateAvailability {
        day_of_week: slot.day_of_week,
        start_time: slot.start_time.trim().to_string(),
        end_time: slot.end_time.trim().to_string(),
        is_available: slot.is_available,
    }
}

/// Prices are stored with two decimals
fn to_decimal(price: f64) -> Result<Decimal, ApiError> {
    Decimal::from_f64(price)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| ApiError::invalid_field("price", "Price is out of range"))
}

fn normalize_currency(currency: Option<&str>) -> String {
    currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_ascii_uppercase()
}

/// Lowercase, trim and dedup keywords so exact keyword search is case-insensitive
fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !out.contains(&keyword) {
            out.push(keyword);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn record(price_type: &str) -> ListingRecord {
        let now = Utc::now();
        ListingRecord {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "Gartenpflege".to_string(),
            description: "Rasen mähen und Hecken schneiden".to_string(),
            category: "garden".to_string(),
            subcategory: None,
            price: dec("25.50"),
            price_type: price_type.to_string(),
            currency: "EUR".to_string(),
            location: "Berlin, Deutschland".to_string(),
            latitude: Some(52.52),
            longitude: Some(13.405),
            distance_limit: Some(10),
            languages: vec!["de".to_string()],
            keywords: vec!["garten".to_string()],
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_to_listing_converts_price() {
        let listing = to_listing(record("HOURLY"), vec![]).unwrap();
        assert_eq!(listing.price, 25.5);
        assert_eq!(listing.price_type, PriceType::Hourly);
        assert!(listing.has_coordinates());
    }

    #[test]
    fn test_to_listing_rejects_unknown_price_type() {
        assert!(matches!(
            to_listing(record("WEEKLY"), vec![]),
            Err(ApiError::Internal(_))
        ));
    }

    #[test]
    fn test_to_decimal_rounds_to_cents() {
        assert_eq!(to_decimal(19.999).unwrap(), dec("20.00"));
        assert_eq!(to_decimal(12.345).unwrap().scale(), 2);
        assert!(to_decimal(f64::NAN).is_err());
    }

    #[test]
    fn test_candidates_truncated() {
        assert!(!candidates_truncated(0, 1000));
        assert!(!candidates_truncated(999, 1000));
        assert!(candidates_truncated(1000, 1000));
    }

    #[test]
    fn test_parse_radius() {
        assert_eq!(parse_radius(None, 25.0).unwrap(), 25.0);
        assert_eq!(parse_radius(Some("  "), 25.0).unwrap(), 25.0);
        assert_eq!(parse_radius(Some("300"), 25.0).unwrap(), 300.0);
        assert_eq!(parse_radius(Some("0"), 25.0).unwrap(), 0.0);

        let err = parse_radius(Some("far"), 25.0).unwrap_err();
        assert_eq!(err.field(), "radius_km");
        let err = parse_radius(Some("-1"), 25.0).unwrap_err();
        assert!(matches!(err, GeoError::InvalidRadius { .. }));
    }

    #[test]
    fn test_normalize_currency_and_keywords() {
        assert_eq!(normalize_currency(None), "EUR");
        assert_eq!(normalize_currency(Some(" usd ")), "USD");
        assert_eq!(
            normalize_keywords(vec!["Garten".into(), "garten ".into(), "".into(), "Rasen".into()]),
            vec!["garten".to_string(), "rasen".to_string()]
        );
    }

    #[test]
    fn test_group_slots_by_listing() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let slot = |listing_id, day| AvailabilityRecord {
            id: Uuid::new_v4(),
            listing_id,
            day_of_week: day,
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            is_available: true,
        };

        let grouped = group_slots(vec![slot(a, 1), slot(b, 2), slot(a, 3)]);
        assert_eq!(grouped[&a].len(), 2);
        assert_eq!(grouped[&a][1].day_of_week, 3);
        assert_eq!(grouped[&b].len(), 1);
    }
}
