//! Reservation lifecycle endpoint tests.

use http::StatusCode;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::helpers::{TestApp, booking_body, db_lock};

async fn book(app: &TestApp, room_type: Uuid, email: &str) -> Uuid {
    let resp = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                room_type,
                email,
                "2030-09-01",
                "2030-09-04",
                2,
                0,
                false,
            )),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);
    Uuid::parse_str(resp.body["reservationId"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn lifecycle_runs_forward_only() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Garden Room", Decimal::new(1500, 0), 2)
        .await;
    app.create_room(room_type, "104", "available").await;

    let id = book(&app, room_type, "guest@example.com").await;

    let detail = app
        .request("GET", &format!("/api/reservations/{id}"), None)
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["reservation"]["status"], "confirmed");
    assert_eq!(detail.body["room"]["room_number"], "104");
    assert_eq!(detail.body["guest"]["email"], "guest@example.com");
    assert!(
        detail.body["invoice"]["invoice_number"]
            .as_str()
            .unwrap()
            .starts_with("INV-")
    );

    let checked_in = app
        .request("POST", &format!("/api/reservations/{id}/check-in"), None)
        .await;
    assert_eq!(checked_in.status, StatusCode::OK);
    assert_eq!(checked_in.body["reservation"]["status"], "checked_in");

    // Cancelling after check-in is an invalid transition.
    let cancel = app
        .request("POST", &format!("/api/reservations/{id}/cancel"), None)
        .await;
    assert_eq!(cancel.status, StatusCode::CONFLICT);
    assert_eq!(cancel.body["error"], "CONFLICT");

    let checked_out = app
        .request("POST", &format!("/api/reservations/{id}/check-out"), None)
        .await;
    assert_eq!(checked_out.status, StatusCode::OK);
    assert_eq!(checked_out.body["reservation"]["status"], "checked_out");
}

#[tokio::test]
async fn cancelling_frees_the_window() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Garden Room", Decimal::new(1500, 0), 2)
        .await;
    app.create_room(room_type, "104", "available").await;

    let id = book(&app, room_type, "first@example.com").await;

    // The only room is taken for the window.
    let blocked = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                room_type,
                "second@example.com",
                "2030-09-01",
                "2030-09-04",
                2,
                0,
                false,
            )),
        )
        .await;
    assert_eq!(blocked.status, StatusCode::BAD_REQUEST);
    assert_eq!(blocked.body["error"], "ROOM_UNAVAILABLE");

    let cancelled = app
        .request("POST", &format!("/api/reservations/{id}/cancel"), None)
        .await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(cancelled.body["reservation"]["status"], "cancelled");

    // The cancelled row no longer blocks the dates.
    let rebooked = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                room_type,
                "second@example.com",
                "2030-09-01",
                "2030-09-04",
                2,
                0,
                false,
            )),
        )
        .await;
    assert_eq!(rebooked.status, StatusCode::OK, "{:?}", rebooked.body);
}

#[tokio::test]
async fn list_is_paginated() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Garden Room", Decimal::new(1500, 0), 2)
        .await;
    app.create_room(room_type, "104", "available").await;
    app.create_room(room_type, "105", "available").await;

    book(&app, room_type, "first@example.com").await;
    book(&app, room_type, "second@example.com").await;

    let resp = app
        .request("GET", "/api/reservations?page=1&page_size=1", None)
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let data = &resp.body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 1);
    assert_eq!(data["total_items"], 2);
    assert_eq!(data["total_pages"], 2);
    assert_eq!(data["has_next"], true);
}

#[tokio::test]
async fn unknown_reservation_is_not_found() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let resp = app
        .request(
            "GET",
            &format!("/api/reservations/{}", Uuid::new_v4()),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["error"], "NOT_FOUND");
}
