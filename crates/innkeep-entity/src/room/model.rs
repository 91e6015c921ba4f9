//! Physical room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::RoomStatus;

/// One physical, individually numbered room unit.
///
/// The status field is a coarse operational flag (e.g. under maintenance)
/// and is independent of date-specific booking state; occupancy for
/// specific dates is derived from reservation rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// Human-readable room number, unique across the property.
    pub room_number: String,
    /// Floor the room is on.
    pub floor: i32,
    /// Operational status.
    pub status: RoomStatus,
    /// The room type this room belongs to.
    pub room_type_id: Uuid,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Check if the room is operationally bookable.
    pub fn is_operational(&self) -> bool {
        self.status.is_bookable()
    }
}
