//! Error types for the marketplace domain

use thiserror::Error;

/// Invalid input to a geographic computation.
///
/// Every variant names the request field that caused it so the API layer can
/// point the client at the offending parameter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("{field} is required")]
    MissingCoordinate { field: &'static str },

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a non-negative number of kilometers, got {value}")]
    InvalidRadius { field: &'static str, value: f64 },
}

impl GeoError {
    /// Name of the request field that failed
    pub fn field(&self) -> &'static str {
        match self {
            GeoError::MissingCoordinate { field }
            | GeoError::NotANumber { field, .. }
            | GeoError::OutOfRange { field, .. }
            | GeoError::InvalidRadius { field, .. } => field,
        }
    }
}

/// Geocoding provider errors
///
/// `AddressNotFound` is a client-side condition (nothing matched the query);
/// `Provider` covers transport, status and decoding failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodingError {
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    #[error("Geocoding provider error: {0}")]
    Provider(String),
}
