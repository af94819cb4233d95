//! Data models for the marketplace

use crate::geo::{GeoPoint, Geotagged};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// How a listing's price is charged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceType {
    #[default]
    Fixed,
    Hourly,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Fixed => "FIXED",
            PriceType::Hourly => "HOURLY",
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIXED" => Ok(PriceType::Fixed),
            "HOURLY" => Ok(PriceType::Hourly),
            other => Err(format!("Price type must be FIXED or HOURLY, got '{other}'")),
        }
    }
}

/// Kind of account behind a listing or favorite
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Private,
    Business,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Private => "PRIVATE",
            AccountType::Business => "BUSINESS",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PRIVATE" => Ok(AccountType::Private),
            "BUSINESS" => Ok(AccountType::Business),
            other => Err(format!("Account type must be PRIVATE or BUSINESS, got '{other}'")),
        }
    }
}

/// Weekly availability window. `day_of_week` runs from 0 (Sunday) to 6.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub day_of_week: i16,
    /// `HH:mm`
    pub start_time: String,
    /// `HH:mm`
    pub end_time: String,
    pub is_available: bool,
}

/// A service offered on the marketplace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub price: f64,
    pub price_type: PriceType,
    pub currency: String,
    /// Formatted address returned by the geocoder
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Maximum distance in km the provider will travel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_limit: Option<i32>,
    pub languages: Vec<String>,
    pub keywords: Vec<String>,
    pub is_active: bool,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

impl Geotagged for Listing {
    fn coordinates(&self) -> Option<GeoPoint> {
        Some(GeoPoint {
            latitude: self.latitude?,
            longitude: self.longitude?,
        })
    }
}

/// A user's saved listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Favorite {
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub created_at: DateTime<Utc>,
}
