//! Reservation listing and lifecycle handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use innkeep_core::types::pagination::PageRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/reservations
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state.reservation_service.list(page).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/reservations/:id
///
/// Returns the reservation together with its guest, room, and invoice,
/// which is everything the back-office detail view needs in one call.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let reservation = state.reservation_service.get(id).await?;
    let guest = state.guest_repo.find_by_id(reservation.guest_id).await?;
    let room = state.room_repo.find_by_id(reservation.room_id).await?;
    let invoice = state.invoice_repo.find_by_reservation(reservation.id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "reservation": reservation,
        "guest": guest,
        "room": room,
        "invoice": invoice,
    })))
}

/// POST /api/reservations/:id/check-in
pub async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let reservation = state.reservation_service.check_in(id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "reservation": reservation }),
    ))
}

/// POST /api/reservations/:id/check-out
pub async fn check_out(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let reservation = state.reservation_service.check_out(id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "reservation": reservation }),
    ))
}

/// POST /api/reservations/:id/cancel
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let reservation = state.reservation_service.cancel(id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "reservation": reservation }),
    ))
}
