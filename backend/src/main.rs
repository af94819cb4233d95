//! Services Marketplace Backend
//!
//! REST API for service listings, favorites and location search, with
//! keyword moderation of listing text and proximity search over geocoded
//! listings.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Business logic, moderation and geocoding
//! - Repositories: Data access
//! - Database: PostgreSQL with SQLx

use anyhow::Result;
use marketplace_backend::services::geocoding::{connect_cache, CachedGeocoder, Geocoder};
use marketplace_backend::{config, db, routes, state::AppState};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Services Marketplace Backend"
    );

    // Validate production configuration
    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    // Create database pool
    info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database).await?;

    // Production runs migrations as a separate job
    if !config::AppConfig::is_production() {
        info!("Running database migrations...");
        db::run_migrations(&db_pool).await?;
    }

    // Create application state; moderation lists and the geocoder are built here
    let mut state = AppState::new(db_pool, config.clone())?;

    // Geocode cache is optional, Redis failures leave it off
    if let Some(cached) = geocode_cache(&config, state.geocoder.clone()).await {
        state = state.with_geocoder(cached);
    }

    // Build application
    let app = routes::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wrap the geocoder in a Redis cache when enabled and reachable
async fn geocode_cache(
    config: &config::AppConfig,
    geocoder: Arc<dyn Geocoder>,
) -> Option<Arc<dyn Geocoder>> {
    if !config.redis.enabled || config.geocoding.cache_ttl_secs == 0 {
        info!("Geocode caching disabled");
        return None;
    }

    info!("Connecting to Redis...");
    let conn = connect_cache(&config.redis.url).await?;
    info!(ttl_secs = config.geocoding.cache_ttl_secs, "Geocode cache enabled");

    Some(Arc::new(CachedGeocoder::new(
        geocoder,
        conn,
        config.geocoding.cache_ttl_secs,
    )))
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "marketplace_backend=info,tower_http=info".into()
        } else {
            "marketplace_backend=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for log aggregation
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    let mut errors = Vec::new();

    if config.jwt.secret.contains("development") || config.jwt.secret.len() < 32 {
        errors.push("JWT secret must be at least 32 characters and not contain 'development'");
    }

    if !config.geocoding.base_url.starts_with("https://") {
        warn!(base_url = %config.geocoding.base_url, "Geocoding base URL is not HTTPS");
    }

    if config.database.url.contains("localhost") || config.database.url.contains("127.0.0.1") {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
