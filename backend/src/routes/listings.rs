//! Listing API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::ListingService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use marketplace_shared::types::{
    AvailabilityResponse, AvailabilitySlotRequest, CreateListingRequest, NearbyListing,
    NearbyQuery, PageQuery, SearchQuery, UpdateListingRequest,
};
use marketplace_shared::{Listing, Page, PageSpec};
use uuid::Uuid;

/// Create listing routes
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_listings).post(create_listing))
        .route("/search", get(search_listings))
        .route("/nearby", get(nearby_listings))
        .route("/category/:category", get(listings_by_category))
        .route("/owner/:owner_id", get(listings_by_owner))
        .route(
            "/:id",
            get(get_listing).put(update_listing).delete(delete_listing),
        )
        .route("/:id/availability", post(add_availability))
}

/// GET /api/v1/listings - Active listings, newest first
async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Listing>>, ApiError> {
    let page = ListingService::list_active(state.db(), &query.spec()).await?;
    Ok(Json(page))
}

/// POST /api/v1/listings - Create a listing
async fn create_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<Listing>), ApiError> {
    let listing = ListingService::create(&state, &auth, req).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// GET /api/v1/listings/search?q=
async fn search_listings(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Page<Listing>>, ApiError> {
    let page = PageSpec::new(query.page, query.limit);
    let result = ListingService::search(state.db(), query.q.as_deref(), &page).await?;
    Ok(Json(result))
}

/// GET /api/v1/listings/nearby?lat=&lon=&radius_km=
async fn nearby_listings(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Page<NearbyListing>>, ApiError> {
    let result = ListingService::nearby(&state, query).await?;
    Ok(Json(result))
}

/// GET /api/v1/listings/category/:category
async fn listings_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Listing>>, ApiError> {
    let page = ListingService::list_by_category(state.db(), &category, &query.spec()).await?;
    Ok(Json(page))
}

/// GET /api/v1/listings/owner/:owner_id
async fn listings_by_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Listing>>, ApiError> {
    let page = ListingService::list_by_owner(state.db(), owner_id, &query.spec()).await?;
    Ok(Json(page))
}

/// GET /api/v1/listings/:id
async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Listing>, ApiError> {
    let listing = ListingService::get(state.db(), id).await?;
    Ok(Json(listing))
}

/// PUT /api/v1/listings/:id
async fn update_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateListingRequest>,
) -> Result<Json<Listing>, ApiError> {
    let listing = ListingService::update(&state, id, auth.user_id, req).await?;
    Ok(Json(listing))
}

/// DELETE /api/v1/listings/:id
async fn delete_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ListingService::delete(state.db(), id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/listings/:id/availability
async fn add_availability(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AvailabilitySlotRequest>,
) -> Result<(StatusCode, Json<AvailabilityResponse>), ApiError> {
    let slot = ListingService::add_availability(state.db(), id, auth.user_id, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(AvailabilityResponse {
            listing_id: id,
            slot,
        }),
    ))
}
