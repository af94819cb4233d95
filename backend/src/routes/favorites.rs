//! Favorites API routes

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::FavoriteService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use marketplace_shared::types::{
    FavoriteCountResponse, FavoriteStatusResponse, FavoriteToggleResponse, PageQuery,
    TopFavoritedListing, TopFavoritesQuery,
};
use marketplace_shared::{Favorite, Listing, Page};
use uuid::Uuid;

/// Create favorites routes
pub fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites))
        .route("/top", get(top_favorites))
        .route(
            "/:listing_id",
            post(add_favorite).delete(remove_favorite),
        )
        .route("/:listing_id/toggle", post(toggle_favorite))
        .route("/:listing_id/is-favorited", get(is_favorited))
        .route("/:listing_id/count", get(favorite_count))
}

/// GET /api/v1/favorites - The caller's favorites
async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<Listing>>, ApiError> {
    let page = FavoriteService::list_for_user(state.db(), auth.user_id, &query.spec()).await?;
    Ok(Json(page))
}

/// GET /api/v1/favorites/top?limit=
async fn top_favorites(
    State(state): State<AppState>,
    Query(query): Query<TopFavoritesQuery>,
) -> Result<Json<Vec<TopFavoritedListing>>, ApiError> {
    let top = FavoriteService::top(state.db(), query.limit).await?;
    Ok(Json(top))
}

/// POST /api/v1/favorites/:listing_id
async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(listing_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let favorite = FavoriteService::add(state.db(), &auth, listing_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /api/v1/favorites/:listing_id
async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(listing_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    FavoriteService::remove(state.db(), auth.user_id, listing_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/favorites/:listing_id/toggle
async fn toggle_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(listing_id): Path<Uuid>,
) -> Result<Json<FavoriteToggleResponse>, ApiError> {
    let result = FavoriteService::toggle(state.db(), &auth, listing_id).await?;
    Ok(Json(result))
}

/// GET /api/v1/favorites/:listing_id/is-favorited
async fn is_favorited(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(listing_id): Path<Uuid>,
) -> Result<Json<FavoriteStatusResponse>, ApiError> {
    let favorited = FavoriteService::is_favorited(state.db(), auth.user_id, listing_id).await?;
    Ok(Json(FavoriteStatusResponse {
        listing_id,
        favorited,
    }))
}

/// GET /api/v1/favorites/:listing_id/count
async fn favorite_count(
    State(state): State<AppState>,
    Path(listing_id): Path<Uuid>,
) -> Result<Json<FavoriteCountResponse>, ApiError> {
    let count = FavoriteService::count_for_listing(state.db(), listing_id).await?;
    Ok(Json(FavoriteCountResponse { listing_id, count }))
}
