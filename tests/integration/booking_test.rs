//! Booking creation endpoint tests.

use http::StatusCode;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::helpers::{TestApp, booking_body, db_lock};

#[tokio::test]
async fn fills_rooms_lowest_number_first_until_sold_out() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let suite = app
        .create_room_type("Deluxe Suite", Decimal::new(3500, 0), 4)
        .await;
    app.create_room(suite, "302", "available").await;
    app.create_room(suite, "301", "available").await;

    let availability = app
        .request(
            "GET",
            "/api/availability?checkIn=2030-03-01&checkOut=2030-03-05&adults=2&children=2",
            None,
        )
        .await;
    assert_eq!(availability.status, StatusCode::OK);
    assert_eq!(
        availability.body["availability"][0]["availableRooms"],
        2
    );

    // First booking: 4 nights x 3500 = 14000, plus 21 % tax.
    let first = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                suite,
                "first@example.com",
                "2030-03-01",
                "2030-03-05",
                2,
                2,
                false,
            )),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK, "{:?}", first.body);
    assert_eq!(first.body["success"], true);
    assert_eq!(first.body["totalAmount"], "16940.00");

    let first_id = Uuid::parse_str(first.body["reservationId"].as_str().unwrap()).unwrap();
    let first_room: String = sqlx::query_scalar(
        "SELECT r.room_number FROM reservations res \
         JOIN rooms r ON r.id = res.room_id WHERE res.id = $1",
    )
    .bind(first_id)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(first_room, "301");

    // Second identical booking takes the remaining room.
    let second = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                suite,
                "second@example.com",
                "2030-03-01",
                "2030-03-05",
                2,
                2,
                false,
            )),
        )
        .await;
    assert_eq!(second.status, StatusCode::OK, "{:?}", second.body);

    let second_id = Uuid::parse_str(second.body["reservationId"].as_str().unwrap()).unwrap();
    let second_room: String = sqlx::query_scalar(
        "SELECT r.room_number FROM reservations res \
         JOIN rooms r ON r.id = res.room_id WHERE res.id = $1",
    )
    .bind(second_id)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(second_room, "302");

    // Third booking for the same window: sold out.
    let third = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                suite,
                "third@example.com",
                "2030-03-01",
                "2030-03-05",
                2,
                2,
                false,
            )),
        )
        .await;
    assert_eq!(third.status, StatusCode::BAD_REQUEST);
    assert_eq!(third.body["error"], "ROOM_UNAVAILABLE");
}

#[tokio::test]
async fn invoice_is_created_with_the_reservation() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Garden Room", Decimal::new(1500, 0), 2)
        .await;
    app.create_room(room_type, "104", "available").await;

    let resp = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                room_type,
                "guest@example.com",
                "2030-05-01",
                "2030-05-03",
                2,
                0,
                true,
            )),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);

    let invoice_number = resp.body["invoiceNumber"].as_str().unwrap();
    assert!(invoice_number.starts_with("INV-"), "{invoice_number}");

    let reservation_id =
        Uuid::parse_str(resp.body["reservationId"].as_str().unwrap()).unwrap();
    let (stored_number, invoice_total, reservation_total): (String, Decimal, Decimal) =
        sqlx::query_as(
            "SELECT i.invoice_number, i.total, res.total_amount \
             FROM invoices i JOIN reservations res ON res.id = i.reservation_id \
             WHERE i.reservation_id = $1",
        )
        .bind(reservation_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();

    assert_eq!(stored_number, invoice_number);
    assert_eq!(invoice_total, reservation_total);
}

#[tokio::test]
async fn repeat_booker_is_not_duplicated() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Garden Room", Decimal::new(1500, 0), 2)
        .await;
    app.create_room(room_type, "104", "available").await;
    app.create_room(room_type, "105", "available").await;

    for window in [("2030-05-01", "2030-05-03"), ("2030-07-01", "2030-07-04")] {
        let resp = app
            .request(
                "POST",
                "/api/bookings",
                Some(booking_body(
                    room_type,
                    "Repeat@Example.com",
                    window.0,
                    window.1,
                    1,
                    0,
                    false,
                )),
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);
    }

    let guest_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM guests WHERE LOWER(email) = LOWER($1)")
            .bind("repeat@example.com")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(guest_count, 1);
}

#[tokio::test]
async fn concurrent_bookings_cannot_both_win_the_last_room() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Single", Decimal::new(800, 0), 2)
        .await;
    app.create_room(room_type, "110", "available").await;

    let (first, second) = tokio::join!(
        app.request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                room_type,
                "alpha@example.com",
                "2030-08-10",
                "2030-08-12",
                1,
                0,
                false,
            )),
        ),
        app.request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                room_type,
                "beta@example.com",
                "2030-08-11",
                "2030-08-13",
                1,
                0,
                false,
            )),
        ),
    );

    let successes = [&first, &second]
        .iter()
        .filter(|r| r.status == StatusCode::OK)
        .count();
    let unavailable = [&first, &second]
        .iter()
        .filter(|r| {
            r.status == StatusCode::BAD_REQUEST && r.body["error"] == "ROOM_UNAVAILABLE"
        })
        .count();

    assert_eq!(successes, 1, "first: {:?}, second: {:?}", first, second);
    assert_eq!(unavailable, 1, "first: {:?}, second: {:?}", first, second);
}

#[tokio::test]
async fn missing_guest_fields_are_rejected() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Garden Room", Decimal::new(1500, 0), 2)
        .await;
    app.create_room(room_type, "104", "available").await;

    let mut body = booking_body(
        room_type,
        "guest@example.com",
        "2030-05-01",
        "2030-05-03",
        2,
        0,
        false,
    );
    body["guestInfo"]["firstName"] = serde_json::json!("");

    let resp = app.request("POST", "/api/bookings", Some(body)).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn party_over_capacity_is_rejected() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Standard Double", Decimal::new(1200, 0), 2)
        .await;
    app.create_room(room_type, "102", "available").await;

    let resp = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                room_type,
                "guest@example.com",
                "2030-05-01",
                "2030-05-03",
                2,
                1,
                false,
            )),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn past_check_in_is_rejected() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Garden Room", Decimal::new(1500, 0), 2)
        .await;
    app.create_room(room_type, "104", "available").await;

    let resp = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(
                room_type,
                "guest@example.com",
                "2020-05-01",
                "2020-05-03",
                2,
                0,
                false,
            )),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "INVALID_DATE_RANGE");
}
