//! Route definitions for the marketplace API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod favorites;
mod health;
mod listings;
mod location;
mod moderation;

#[cfg(test)]
mod router_tests;

pub use favorites::favorite_routes;
pub use listings::listing_routes;
pub use location::location_routes;
pub use moderation::moderation_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Services Marketplace API v1" }))
        .nest("/listings", listing_routes())
        .nest("/location", location_routes())
        .nest("/favorites", favorite_routes())
        .nest("/moderation", moderation_routes())
}
