//! Booking writer: validated, conflict-checked, transactional booking
//! creation.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use innkeep_core::AppError;
use innkeep_core::config::booking::BookingConfig;
use innkeep_core::error::ErrorKind;
use innkeep_core::result::AppResult;
use innkeep_database::repositories::guest::GuestRepository;
use innkeep_database::repositories::invoice::InvoiceRepository;
use innkeep_database::repositories::reservation::ReservationRepository;
use innkeep_database::repositories::room::RoomRepository;
use innkeep_database::repositories::room_type::RoomTypeRepository;
use innkeep_entity::guest::CreateGuest;
use innkeep_entity::invoice::CreateInvoice;
use innkeep_entity::reservation::{CreateReservation, ReservationStatus, StayWindow};

use crate::pricing;

/// A validated booking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Guest identity; matched to an existing guest by email or created.
    pub guest: CreateGuest,
    /// The room type to book.
    pub room_type_id: Uuid,
    /// First occupied night.
    pub check_in: NaiveDate,
    /// Day of departure (exclusive).
    pub check_out: NaiveDate,
    /// Number of adults.
    pub adults: i32,
    /// Number of children.
    pub children: i32,
    /// Whether breakfast is included.
    pub breakfast_included: bool,
    /// Free-text special requests.
    pub notes: Option<String>,
}

/// The result of a successful booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// The created reservation.
    pub reservation_id: Uuid,
    /// The invoice number issued for the stay.
    pub invoice_number: String,
    /// The server-computed total.
    pub total_amount: Decimal,
}

/// Creates bookings: re-checks conflicts, assigns a room, upserts the
/// guest, prices the stay server-side, and persists reservation + invoice
/// in one transaction.
#[derive(Debug, Clone)]
pub struct BookingService {
    /// Pool for opening booking transactions.
    pool: PgPool,
    /// Room type repository.
    room_type_repo: Arc<RoomTypeRepository>,
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Guest repository.
    guest_repo: Arc<GuestRepository>,
    /// Reservation repository.
    reservation_repo: Arc<ReservationRepository>,
    /// Invoice repository.
    invoice_repo: Arc<InvoiceRepository>,
    /// Pricing parameters.
    config: BookingConfig,
}

impl BookingService {
    /// Create a new booking service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        room_type_repo: Arc<RoomTypeRepository>,
        room_repo: Arc<RoomRepository>,
        guest_repo: Arc<GuestRepository>,
        reservation_repo: Arc<ReservationRepository>,
        invoice_repo: Arc<InvoiceRepository>,
        config: BookingConfig,
    ) -> Self {
        Self {
            pool,
            room_type_repo,
            room_repo,
            guest_repo,
            reservation_repo,
            invoice_repo,
            config,
        }
    }

    /// Create a booking.
    ///
    /// The conflict check and the reservation insert run inside one
    /// transaction holding `FOR UPDATE` locks on the candidate rooms, so
    /// two concurrent bookings for overlapping windows on the same room
    /// cannot both succeed; the database exclusion constraint backs this
    /// up. The invoice is written in the same transaction: no reservation
    /// is ever visible without its invoice.
    pub async fn create_booking(&self, request: BookingRequest) -> AppResult<BookingConfirmation> {
        validate_request(&request)?;

        let today = crate::today();
        let window = StayWindow::new_from(request.check_in, request.check_out, today)?;

        let room_type = self
            .room_type_repo
            .find_by_id(request.room_type_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Room type {} not found", request.room_type_id))
            })?;

        if !room_type.fits(request.adults, request.children) {
            return Err(AppError::validation(format!(
                "Party of {} exceeds the maximum occupancy of {} for {}",
                request.adults + request.children,
                room_type.max_occupancy,
                room_type.name
            )));
        }

        // The quote shown to the client is never trusted; the stored total
        // is recomputed here from catalog data.
        let breakdown = pricing::compute_breakdown(
            room_type.base_price,
            &window,
            request.adults,
            request.children,
            request.breakfast_included,
            &self.config,
        );

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to start booking transaction", e)
        })?;

        let rooms = self
            .room_repo
            .lock_operational_by_type(&mut tx, request.room_type_id)
            .await?;
        if rooms.is_empty() {
            return Err(AppError::room_unavailable(format!(
                "No operational rooms of type {}",
                room_type.name
            )));
        }

        let room_ids: Vec<_> = rooms.iter().map(|room| room.id).collect();
        let booked = self
            .reservation_repo
            .booked_room_ids_in(&mut tx, &room_ids, &window)
            .await?;

        // Deterministic assignment: lowest room number first.
        let room = rooms
            .iter()
            .find(|room| !booked.contains(&room.id))
            .ok_or_else(|| {
                AppError::room_unavailable(format!(
                    "No room of type {} is free between {} and {}",
                    room_type.name, window.check_in, window.check_out
                ))
            })?;

        let guest = match self
            .guest_repo
            .find_by_email_in(&mut tx, &request.guest.email)
            .await?
        {
            Some(existing) => existing,
            None => self.guest_repo.create_in(&mut tx, &request.guest).await?,
        };

        let reservation = self
            .reservation_repo
            .create_in(
                &mut tx,
                &CreateReservation {
                    guest_id: guest.id,
                    room_id: room.id,
                    window,
                    adults: request.adults,
                    children: request.children,
                    status: ReservationStatus::Confirmed,
                    total_amount: breakdown.total,
                    notes: request.notes.clone(),
                },
            )
            .await?;

        let invoice_number = self.invoice_repo.next_invoice_number(&mut tx, today).await?;
        let invoice = self
            .invoice_repo
            .create_in(
                &mut tx,
                &CreateInvoice {
                    reservation_id: reservation.id,
                    due_date: window.check_in,
                    subtotal: breakdown.subtotal,
                    tax_amount: breakdown.tax_amount,
                    total: breakdown.total,
                },
                &invoice_number,
                today,
            )
            .await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit booking", e)
        })?;

        info!(
            reservation_id = %reservation.id,
            room_number = %room.room_number,
            guest_id = %guest.id,
            invoice_number = %invoice.invoice_number,
            total = %reservation.total_amount,
            "Booking created"
        );

        Ok(BookingConfirmation {
            reservation_id: reservation.id,
            invoice_number: invoice.invoice_number,
            total_amount: reservation.total_amount,
        })
    }
}

/// Check the required guest and booking fields.
fn validate_request(request: &BookingRequest) -> AppResult<()> {
    if request.guest.first_name.trim().is_empty() {
        return Err(AppError::validation("Guest first name is required"));
    }
    if request.guest.last_name.trim().is_empty() {
        return Err(AppError::validation("Guest last name is required"));
    }
    let email = request.guest.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::validation("A valid guest email is required"));
    }
    if request.adults < 1 {
        return Err(AppError::validation("At least one adult is required"));
    }
    if request.children < 0 {
        return Err(AppError::validation("Child count must not be negative"));
    }
    Ok(())
}
