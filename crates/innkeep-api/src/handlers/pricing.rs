//! Price calculation handler.

use axum::Json;
use axum::extract::State;

use innkeep_entity::reservation::StayWindow;

use crate::dto::request::CalculatePriceRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/calculate-price
pub async fn calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculatePriceRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let window = StayWindow::new(req.check_in_date, req.check_out_date)?;

    let calculation = state
        .pricing_service
        .calculate(
            req.room_type_id,
            &window,
            req.adults,
            req.children,
            req.breakfast_included,
        )
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "calculation": calculation }),
    ))
}
