//! Reservation entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ReservationStatus;
use super::window::StayWindow;

/// A booked stay of one physical room for a guest over a date range.
///
/// `total_amount` is computed once at creation and persisted; later price
/// changes on the room type never alter it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// The guest who booked.
    pub guest_id: Uuid,
    /// The physical room assigned.
    pub room_id: Uuid,
    /// First occupied night.
    pub check_in: NaiveDate,
    /// Day of departure (exclusive).
    pub check_out: NaiveDate,
    /// Number of adults (at least 1).
    pub adults: i32,
    /// Number of children.
    pub children: i32,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Total price stored at creation time.
    pub total_amount: Decimal,
    /// Free-text notes / special requests.
    pub notes: Option<String>,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// The stay window of this reservation.
    pub fn window(&self) -> StayWindow {
        StayWindow {
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }
}

/// Data required to persist a new reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservation {
    /// The guest who booked.
    pub guest_id: Uuid,
    /// The physical room assigned.
    pub room_id: Uuid,
    /// Stay window.
    pub window: StayWindow,
    /// Number of adults.
    pub adults: i32,
    /// Number of children.
    pub children: i32,
    /// Initial lifecycle status.
    pub status: ReservationStatus,
    /// Server-computed total.
    pub total_amount: Decimal,
    /// Free-text notes / special requests.
    pub notes: Option<String>,
}
