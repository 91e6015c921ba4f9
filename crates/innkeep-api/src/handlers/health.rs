//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
///
/// Liveness plus a database round trip, so a dead pool shows up here
/// before it shows up as failed bookings.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let database = innkeep_database::connection::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    Ok(Json(serde_json::json!({
        "success": true,
        "status": if database { "ok" } else { "degraded" },
        "database": database,
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
