//! Room catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::response::RoomTypeInventoryDto;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/rooms
///
/// Full catalog with per-type room counts. "Available" here means the
/// operational status flag only; there is no date filter.
pub async fn catalog(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let inventory = state.catalog_service.inventory().await?;

    let rooms: Vec<RoomTypeInventoryDto> = inventory
        .into_iter()
        .map(RoomTypeInventoryDto::from)
        .collect();

    Ok(Json(serde_json::json!({ "success": true, "rooms": rooms })))
}

/// GET /api/room-types/:id
pub async fn get_room_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let room_type = state.catalog_service.get_room_type(id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "roomType": room_type }),
    ))
}

/// GET /api/room-types/:id/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let rooms = state.catalog_service.list_rooms_by_type(id).await?;
    Ok(Json(serde_json::json!({ "success": true, "rooms": rooms })))
}
