//! Availability search endpoint tests.

use http::StatusCode;
use rust_decimal::Decimal;

use crate::helpers::{TestApp, booking_body, db_lock};

#[tokio::test]
async fn capacity_filter_excludes_small_room_types() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let small = app
        .create_room_type("Standard Double", Decimal::new(1200, 0), 2)
        .await;
    let large = app
        .create_room_type("Family Suite", Decimal::new(2800, 0), 5)
        .await;
    app.create_room(small, "101", "available").await;
    app.create_room(large, "201", "available").await;

    let resp = app
        .request(
            "GET",
            "/api/availability?checkIn=2030-03-01&checkOut=2030-03-05&adults=3&children=2",
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let availability = resp.body["availability"].as_array().unwrap();
    assert_eq!(availability.len(), 1);
    assert_eq!(availability[0]["name"], "Family Suite");
    assert_eq!(availability[0]["max_occupancy"], 5);
    assert_eq!(availability[0]["availableRooms"], 1);
    assert_eq!(availability[0]["totalRooms"], 1);
    assert_eq!(availability[0]["available"], true);
}

#[tokio::test]
async fn back_to_back_stays_do_not_conflict() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Garden Room", Decimal::new(1500, 0), 2)
        .await;
    app.create_room(room_type, "104", "available").await;

    let booked = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                room_type,
                "first@example.com",
                "2030-06-10",
                "2030-06-13",
                2,
                0,
                false,
            )),
        )
        .await;
    assert_eq!(booked.status, StatusCode::OK, "{:?}", booked.body);

    // Overlapping on the 12th: the room is taken.
    let overlapping = app
        .request(
            "GET",
            "/api/availability?checkIn=2030-06-12&checkOut=2030-06-15&adults=2&children=0",
            None,
        )
        .await;
    assert_eq!(overlapping.status, StatusCode::OK);
    assert!(overlapping.body["availability"].as_array().unwrap().is_empty());

    // Starting on the checkout day: no conflict.
    let back_to_back = app
        .request(
            "GET",
            "/api/availability?checkIn=2030-06-13&checkOut=2030-06-15&adults=2&children=0",
            None,
        )
        .await;
    assert_eq!(back_to_back.status, StatusCode::OK);
    let availability = back_to_back.body["availability"].as_array().unwrap();
    assert_eq!(availability.len(), 1);
    assert_eq!(availability[0]["availableRooms"], 1);
}

#[tokio::test]
async fn maintenance_rooms_are_never_offered() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Attic Room", Decimal::new(900, 0), 2)
        .await;
    app.create_room(room_type, "401", "maintenance").await;
    app.create_room(room_type, "402", "out_of_order").await;

    let resp = app
        .request(
            "GET",
            "/api/availability?checkIn=2030-03-01&checkOut=2030-03-03&adults=2&children=0",
            None,
        )
        .await;

    // All rooms out of service is an empty result, never an error.
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body["availability"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_dates_are_rejected() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let resp = app
        .request("GET", "/api/availability?checkIn=2030-03-01", None)
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn zero_night_window_is_rejected() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let resp = app
        .request(
            "GET",
            "/api/availability?checkIn=2030-03-01&checkOut=2030-03-01&adults=2",
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn past_check_in_is_rejected() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let resp = app
        .request(
            "GET",
            "/api/availability?checkIn=2020-01-01&checkOut=2020-01-05&adults=2",
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn rooms_of_a_type_are_listed_by_number() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Courtyard Room", Decimal::new(1100, 0), 3)
        .await;
    app.create_room(room_type, "302", "available").await;
    app.create_room(room_type, "301", "maintenance").await;

    let resp = app
        .request("GET", &format!("/api/room-types/{room_type}/rooms"), None)
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let rooms = resp.body["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["room_number"], "301");
    assert_eq!(rooms[0]["status"], "maintenance");
    assert_eq!(rooms[1]["room_number"], "302");

    let missing = app
        .request(
            "GET",
            &format!("/api/room-types/{}/rooms", uuid::Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rooms_catalog_reports_operational_counts() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Courtyard Room", Decimal::new(1100, 0), 3)
        .await;
    app.create_room(room_type, "301", "available").await;
    app.create_room(room_type, "302", "maintenance").await;

    let resp = app.request("GET", "/api/rooms", None).await;

    assert_eq!(resp.status, StatusCode::OK);
    let rooms = resp.body["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["totalRooms"], 2);
    assert_eq!(rooms[0]["availableRooms"], 1);
}
