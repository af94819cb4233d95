//! Input validation functions
//!
//! Length and range checks are declared on the request types with the
//! `validator` derive; the checks here cover what the derive cannot express
//! (prices, price types, `HH:mm` times) and turn either kind of failure into a
//! single field-tagged [`ValidationError`].

use crate::models::PriceType;
use crate::types::{AvailabilitySlotRequest, CreateListingRequest, UpdateListingRequest};
use std::sync::OnceLock;
use validator::{Validate, ValidationErrors};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

/// Most suggestions a single autocomplete call may return
pub const MAX_AUTOCOMPLETE_LIMIT: i64 = 10;

fn time_regex() -> &'static regex_lite::Regex {
    static TIME: OnceLock<regex_lite::Regex> = OnceLock::new();
    TIME.get_or_init(|| {
        regex_lite::Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern is valid")
    })
}

/// Validate title length in characters
pub fn validate_title(title: &str) -> Result<(), String> {
    let len = title.trim().chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(format!(
            "Title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters"
        ));
    }
    Ok(())
}

/// Validate description length in characters
pub fn validate_description(description: &str) -> Result<(), String> {
    let len = description.trim().chars().count();
    if !(DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len) {
        return Err(format!(
            "Description must be between {DESCRIPTION_MIN_CHARS} and {DESCRIPTION_MAX_CHARS} characters"
        ));
    }
    Ok(())
}

/// Validate price: finite and strictly positive
pub fn validate_price(price: f64) -> Result<(), String> {
    if price.is_nan() || price.is_infinite() {
        return Err("Price must be a valid number".to_string());
    }
    if price <= 0.0 {
        return Err("Price must be greater than 0".to_string());
    }
    Ok(())
}

/// Validate and parse a price type (`FIXED` or `HOURLY`)
pub fn validate_price_type(price_type: &str) -> Result<PriceType, String> {
    price_type.parse()
}

/// Validate a day of week, 0 (Sunday) through 6
pub fn validate_day_of_week(day: i16) -> Result<(), String> {
    if !(0..=6).contains(&day) {
        return Err("Day of week must be between 0 and 6".to_string());
    }
    Ok(())
}

/// Validate a 24-hour `HH:mm` time (leading zero on the hour optional)
pub fn validate_time_of_day(time: &str) -> Result<(), String> {
    if !time_regex().is_match(time) {
        return Err("Time must be in HH:mm format".to_string());
    }
    Ok(())
}

/// Validate a currency code: three ASCII letters
pub fn validate_currency(currency: &str) -> Result<(), String> {
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err("Currency must be a three-letter code".to_string());
    }
    Ok(())
}

/// Validate that a list has at least one non-blank entry
pub fn validate_non_empty_list(items: &[String], what: &str) -> Result<(), String> {
    if !items.iter().any(|s| !s.trim().is_empty()) {
        return Err(format!("At least one {what} is required"));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "title" => "Title",
        "description" => "Description",
        "category" => "Category",
        "subcategory" => "Subcategory",
        "price" => "Price",
        "price_type" => "Price Type",
        "currency" => "Currency",
        "location" => "Location",
        "distance_limit" => "Distance Limit",
        "languages" => "Languages",
        "keywords" => "Keywords",
        "availability" => "Availability",
        "day_of_week" => "Day of Week",
        "start_time" => "Start Time",
        "end_time" => "End Time",
        "lat" | "latitude" | "lat1" | "lat2" => "Latitude",
        "lon" | "longitude" | "lon1" | "lon2" => "Longitude",
        "radius_km" => "Search Radius",
        "address" => "Address",
        "q" => "Query",
        "limit" => "Limit",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// First failure of a derive-based validation, by field name order
    pub fn from_errors(errors: &ValidationErrors) -> Option<Self> {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let (field, errs) = fields.into_iter().next()?;
        let field = field.to_string();
        let message = errs
            .first()
            .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| format!("{} is invalid", get_field_display_label(&field)));
        Some(Self::new(&field, &message))
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

fn check(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|msg| ValidationError::new(field, &msg))
}

fn derive_checks(target: &impl Validate) -> Result<(), ValidationError> {
    match target.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(ValidationError::from_errors(&errors)
            .unwrap_or_else(|| ValidationError::new("request", "Invalid request"))),
    }
}

/// Validate one availability slot
pub fn validate_availability_slot(slot: &AvailabilitySlotRequest) -> Result<(), ValidationError> {
    derive_checks(slot)?;
    check("start_time", validate_time_of_day(&slot.start_time))?;
    check("end_time", validate_time_of_day(&slot.end_time))?;
    Ok(())
}

/// Validate a create request, reporting the first failing field
pub fn validate_create_listing(req: &CreateListingRequest) -> Result<PriceType, ValidationError> {
    derive_checks(req)?;
    check("title", validate_title(&req.title))?;
    check("description", validate_description(&req.description))?;
    check("price", validate_price(req.price))?;
    let price_type = validate_price_type(&req.price_type)
        .map_err(|msg| ValidationError::new("price_type", &msg))?;
    if let Some(ref currency) = req.currency {
        check("currency", validate_currency(currency))?;
    }
    check("languages", validate_non_empty_list(&req.languages, "language"))?;
    check("keywords", validate_non_empty_list(&req.keywords, "keyword"))?;
    for slot in &req.availability {
        validate_availability_slot(slot)?;
    }
    Ok(price_type)
}

/// Validate the fields present in an update request
pub fn validate_update_listing(
    req: &UpdateListingRequest,
) -> Result<Option<PriceType>, ValidationError> {
    derive_checks(req)?;
    if let Some(ref title) = req.title {
        check("title", validate_title(title))?;
    }
    if let Some(ref description) = req.description {
        check("description", validate_description(description))?;
    }
    if let Some(price) = req.price {
        check("price", validate_price(price))?;
    }
    if let Some(ref currency) = req.currency {
        check("currency", validate_currency(currency))?;
    }
    if let Some(ref languages) = req.languages {
        check("languages", validate_non_empty_list(languages, "language"))?;
    }
    if let Some(ref keywords) = req.keywords {
        check("keywords", validate_non_empty_list(keywords, "keyword"))?;
    }
    req.price_type
        .as_deref()
        .map(validate_price_type)
        .transpose()
        .map_err(|msg| ValidationError::new("price_type", &msg))
}
