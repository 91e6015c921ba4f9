//! Room type entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable category of room (e.g. "Deluxe Suite").
///
/// Price changes never touch historical reservations: every reservation
/// stores its own computed total at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomType {
    /// Unique room type identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: Option<String>,
    /// Nightly base price.
    pub base_price: Decimal,
    /// Maximum number of occupants (adults + children).
    pub max_occupancy: i32,
    /// Amenity labels (unordered).
    pub amenities: Vec<String>,
    /// When the room type was created.
    pub created_at: DateTime<Utc>,
    /// When the room type was last updated.
    pub updated_at: DateTime<Utc>,
}

impl RoomType {
    /// Check whether a party of the given size fits this room type.
    pub fn fits(&self, adults: i32, children: i32) -> bool {
        adults + children <= self.max_occupancy
    }
}

/// Data required to create a new room type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomType {
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: Option<String>,
    /// Nightly base price.
    pub base_price: Decimal,
    /// Maximum number of occupants.
    pub max_occupancy: i32,
    /// Amenity labels.
    pub amenities: Vec<String>,
}

/// A room type annotated with its physical room counts.
///
/// "Available" here is the operational status flag only, independent of
/// any date window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomTypeInventory {
    /// The room type.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub room_type: RoomType,
    /// Total physical rooms of this type.
    pub total_rooms: i64,
    /// Rooms currently in operational status `available`.
    pub operational_rooms: i64,
}
