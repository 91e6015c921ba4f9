//! Booking creation handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use innkeep_core::AppError;
use innkeep_entity::guest::CreateGuest;
use innkeep_service::booking::BookingRequest;

use crate::dto::request::CreateBookingRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid booking request: {e}")))?;

    let confirmation = state
        .booking_service
        .create_booking(BookingRequest {
            guest: CreateGuest {
                first_name: req.guest_info.first_name,
                last_name: req.guest_info.last_name,
                email: req.guest_info.email,
                phone: req.guest_info.phone,
                address: None,
                city: None,
                country: req.guest_info.nationality,
            },
            room_type_id: req.room_type_id,
            check_in: req.check_in_date,
            check_out: req.check_out_date,
            adults: req.adults,
            children: req.children,
            breakfast_included: req.breakfast_included,
            notes: req.special_requests,
        })
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "reservationId": confirmation.reservation_id,
        "invoiceNumber": confirmation.invoice_number,
        "totalAmount": confirmation.total_amount,
    })))
}
