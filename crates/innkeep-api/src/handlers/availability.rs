//! Availability search handler.

use axum::Json;
use axum::extract::{Query, State};
use chrono::NaiveDate;

use innkeep_core::AppError;

use crate::dto::request::AvailabilityQuery;
use crate::dto::response::AvailabilityEntryDto;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/availability
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let check_in = parse_date("checkIn", params.check_in.as_deref())?;
    let check_out = parse_date("checkOut", params.check_out.as_deref())?;

    let entries = state
        .availability_service
        .find_available_room_types(check_in, check_out, params.adults, params.children)
        .await?;

    let availability: Vec<AvailabilityEntryDto> =
        entries.into_iter().map(AvailabilityEntryDto::from).collect();

    Ok(Json(
        serde_json::json!({ "success": true, "availability": availability }),
    ))
}

/// Parse a required `YYYY-MM-DD` query parameter.
fn parse_date(name: &str, value: Option<&str>) -> Result<NaiveDate, AppError> {
    let value = value.ok_or_else(|| AppError::validation(format!("{name} is required")))?;
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::invalid_date_range(format!("{name} must be a valid YYYY-MM-DD date"))
    })
}
