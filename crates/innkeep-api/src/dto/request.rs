//! Request DTOs with validation.
//!
//! Wire field names follow the published client contract (`checkIn`,
//! `checkInDate`, `breakfastIncluded`, ...); the mixed naming is the
//! contract the booking widget already speaks, kept deliberately.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Query parameters for the availability search.
///
/// Dates arrive as raw strings so that both missing and malformed values
/// produce the API's JSON error shape instead of a bare extractor
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Check-in date (`YYYY-MM-DD`).
    #[serde(rename = "checkIn")]
    pub check_in: Option<String>,
    /// Check-out date (`YYYY-MM-DD`).
    #[serde(rename = "checkOut")]
    pub check_out: Option<String>,
    /// Number of adults.
    #[serde(default = "default_adults")]
    pub adults: i32,
    /// Number of children.
    #[serde(default)]
    pub children: i32,
}

/// Body for the price calculation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePriceRequest {
    /// The room type to price.
    pub room_type_id: Uuid,
    /// Check-in date.
    pub check_in_date: NaiveDate,
    /// Check-out date.
    pub check_out_date: NaiveDate,
    /// Number of adults.
    pub adults: i32,
    /// Number of children.
    #[serde(default)]
    pub children: i32,
    /// Whether breakfast is included.
    #[serde(default)]
    pub breakfast_included: bool,
}

/// Guest identity supplied with a booking.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuestInfo {
    /// First name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Email address (dedup key for repeat bookers).
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Nationality / country.
    pub nationality: Option<String>,
}

/// Body for the booking creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Guest identity.
    #[validate(nested)]
    pub guest_info: GuestInfo,
    /// The room type to book.
    pub room_type_id: Uuid,
    /// Check-in date.
    pub check_in_date: NaiveDate,
    /// Check-out date.
    pub check_out_date: NaiveDate,
    /// Number of adults.
    pub adults: i32,
    /// Number of children.
    #[serde(default)]
    pub children: i32,
    /// Free-text special requests.
    pub special_requests: Option<String>,
    /// Whether breakfast is included.
    #[serde(default)]
    pub breakfast_included: bool,
}

fn default_adults() -> i32 {
    1
}
