//! Reservation lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a reservation.
///
/// Reservations are never deleted; cancellation is a status transition, so
/// the booking history stays auditable and the no-overlap invariant cannot
/// be bypassed by delete/recreate races.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Created but not yet confirmed.
    Pending,
    /// Confirmed booking, guest not yet arrived.
    Confirmed,
    /// Guest has checked in.
    CheckedIn,
    /// Guest has checked out.
    CheckedOut,
    /// Cancelled before check-in. Frees the room dates.
    Cancelled,
}

impl ReservationStatus {
    /// Check if a transition from this status to `next` is allowed.
    ///
    /// The lifecycle is `pending → confirmed → checked_in → checked_out`,
    /// with cancellation allowed from any state before check-in.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Confirmed, Self::CheckedIn)
                | (Self::CheckedIn, Self::CheckedOut)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
        )
    }

    /// Check if the reservation still blocks its room's dates.
    pub fn blocks_dates(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = innkeep_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(innkeep_core::AppError::validation(format!(
                "Invalid reservation status: '{s}'"
            ))),
        }
    }
}
