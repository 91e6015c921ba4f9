//! Guest entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A person who has made or is making a booking.
///
/// The email address acts as a soft natural key: repeat bookers are
/// matched by email instead of accumulating duplicate rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    /// Unique guest identifier.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address, the dedup key.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Country or nationality.
    pub country: Option<String>,
    /// When the guest was first recorded.
    pub created_at: DateTime<Utc>,
    /// When the guest was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Guest {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a new guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGuest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Country or nationality.
    pub country: Option<String>,
}
