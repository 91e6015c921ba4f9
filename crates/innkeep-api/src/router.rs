//! Route definitions for the Innkeep HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(booking_flow_routes())
        .merge(catalog_routes())
        .merge(reservation_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Public booking flow: search, quote, book.
fn booking_flow_routes() -> Router<AppState> {
    Router::new()
        .route("/availability", get(handlers::availability::search))
        .route("/calculate-price", post(handlers::pricing::calculate))
        .route("/bookings", post(handlers::booking::create))
}

/// Room catalog.
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::room::catalog))
        .route("/room-types/{id}", get(handlers::room::get_room_type))
        .route("/room-types/{id}/rooms", get(handlers::room::list_rooms))
}

/// Back-office reservation management.
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/reservations", get(handlers::reservation::list))
        .route("/reservations/{id}", get(handlers::reservation::get))
        .route(
            "/reservations/{id}/check-in",
            post(handlers::reservation::check_in),
        )
        .route(
            "/reservations/{id}/check-out",
            post(handlers::reservation::check_out),
        )
        .route(
            "/reservations/{id}/cancel",
            post(handlers::reservation::cancel),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
