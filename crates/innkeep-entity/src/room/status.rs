//! Room operational status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational status of a physical room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// Room is in service and can be booked.
    Available,
    /// Room is currently occupied by a guest.
    Occupied,
    /// Room is being cleaned or under maintenance.
    Maintenance,
    /// Room is out of order and removed from sale.
    OutOfOrder,
}

impl RoomStatus {
    /// Check if a room in this status can take new bookings.
    ///
    /// Only `available` counts; maintenance and out-of-order rooms are
    /// excluded from availability regardless of date.
    pub fn is_bookable(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::OutOfOrder => "out_of_order",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = innkeep_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            "out_of_order" => Ok(Self::OutOfOrder),
            _ => Err(innkeep_core::AppError::validation(format!(
                "Invalid room status: '{s}'. Expected one of: available, occupied, maintenance, out_of_order"
            ))),
        }
    }
}
