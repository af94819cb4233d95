//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The JWT verifier, the moderation term sets and the geocoder are built
//! once at startup; every field is cheap to clone across tasks.

use crate::auth::JwtVerifier;
use crate::config::AppConfig;
use crate::services::geocoding::{Geocoder, PhotonGeocoder};
use crate::services::moderation::ModerationService;
use anyhow::Result;
use marketplace_shared::ContentModerator;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer token verifier with its decoding key
    pub jwt: JwtVerifier,
    /// Immutable moderation term sets
    pub moderator: Arc<ContentModerator>,
    /// Address lookup provider
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Create the state with a Photon geocoder and the configured moderator
    pub fn new(db: PgPool, config: AppConfig) -> Result<Self> {
        let geocoder = PhotonGeocoder::new(&config.geocoding)?;
        let moderator = ModerationService::build(&config.moderation);

        Ok(Self {
            db,
            jwt: JwtVerifier::new(&config.jwt.secret),
            config: Arc::new(config),
            moderator: Arc::new(moderator),
            geocoder: Arc::new(geocoder),
        })
    }

    /// Replace the geocoder (a cached wrapper, or a stub in tests)
    pub fn with_geocoder(mut self, geocoder: Arc<dyn Geocoder>) -> Self {
        self.geocoder = geocoder;
        self
    }

    pub fn with_moderator(mut self, moderator: ContentModerator) -> Self {
        self.moderator = Arc::new(moderator);
        self
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the JWT verifier
    #[inline]
    pub fn jwt(&self) -> &JwtVerifier {
        &self.jwt
    }

    #[inline]
    pub fn moderator(&self) -> &ContentModerator {
        &self.moderator
    }

    #[inline]
    pub fn geocoder(&self) -> &dyn Geocoder {
        self.geocoder.as_ref()
    }
}
