//! Price calculation endpoint tests.

use http::StatusCode;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::helpers::{TestApp, db_lock};

fn price_body(room_type_id: Uuid, breakfast: bool) -> serde_json::Value {
    serde_json::json!({
        "roomTypeId": room_type_id,
        "checkInDate": "2030-06-10",
        "checkOutDate": "2030-06-13",
        "adults": 2,
        "children": 0,
        "breakfastIncluded": breakfast,
    })
}

#[tokio::test]
async fn itemized_breakdown_with_breakfast() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Hillside Double", Decimal::new(1800, 0), 2)
        .await;

    let resp = app
        .request("POST", "/api/calculate-price", Some(price_body(room_type, true)))
        .await;

    assert_eq!(resp.status, StatusCode::OK, "{:?}", resp.body);
    let calc = &resp.body["calculation"];
    assert_eq!(calc["nights"], 3);
    assert_eq!(calc["room_total"], "5400");
    assert_eq!(calc["breakfast_total"], "48");
    assert_eq!(calc["subtotal"], "5448");
    assert_eq!(calc["tax_rate"], "0.21");
    assert_eq!(calc["tax_amount"], "1144.08");
    assert_eq!(calc["total"], "6592.08");
}

#[tokio::test]
async fn identical_requests_return_identical_bodies() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Hillside Double", Decimal::new(1800, 0), 2)
        .await;

    let first = app
        .request("POST", "/api/calculate-price", Some(price_body(room_type, true)))
        .await;
    let second = app
        .request("POST", "/api/calculate-price", Some(price_body(room_type, true)))
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn unknown_room_type_is_not_found() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let resp = app
        .request(
            "POST",
            "/api/calculate-price",
            Some(price_body(Uuid::new_v4(), false)),
        )
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn empty_window_is_rejected() {
    let _guard = db_lock().await;
    let app = TestApp::new().await;

    let room_type = app
        .create_room_type("Hillside Double", Decimal::new(1800, 0), 2)
        .await;

    let resp = app
        .request(
            "POST",
            "/api/calculate-price",
            Some(serde_json::json!({
                "roomTypeId": room_type,
                "checkInDate": "2030-06-10",
                "checkOutDate": "2030-06-10",
                "adults": 2,
            })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "INVALID_DATE_RANGE");
}
