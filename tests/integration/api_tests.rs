//! API integration tests
//!
//! Drive the router in-process with a clock frozen on Monday 2026-10-19,
//! 08:30 salon time.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chrono::{FixedOffset, TimeZone};
use serde_json::{json, Value};
use tower::ServiceExt;

use belos_server::{
    api, clock::FixedClock, config::AppConfig, repository::Repository, services::Services,
    AppState,
};

fn app() -> Router {
    let config = AppConfig::default();
    let now = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 19, 8, 30, 0)
        .unwrap();
    let services = Services::new(Repository::in_memory(), &config, Arc::new(FixedClock(now)));

    api::create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/v1{}", uri))
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri))
        .header(CONTENT_TYPE, "application/json")
        .header("x-operator-id", "usr_admin")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn number(value: &Value) -> f64 {
    value.as_f64().expect("not a number")
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app(), get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_default_salon_config() {
    let (status, body) = send(&app(), get("/salon/config")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookingWindowDays"], 14);
    assert_eq!(body["schedule"].as_array().unwrap().len(), 7);
    assert_eq!(body["schedule"][0]["isOpen"], false);
    assert_eq!(body["schedule"][1]["closeTime"], "18:00");
}

#[tokio::test]
async fn test_availability_for_closed_day() {
    let (status, body) = send(&app(), get("/salon/availability?date=2026-10-25")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4);
    assert!(body["message"].as_str().unwrap().contains("Domingo"));
}

#[tokio::test]
async fn test_availability_for_today() {
    let (status, body) = send(&app(), get("/salon/availability?date=2026-10-19")).await;
    assert_eq!(status, StatusCode::OK);
    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 9);
    assert_eq!(slots[0], "09:00");
    assert_eq!(slots[8], "17:00");
}

#[tokio::test]
async fn test_availability_outside_booking_window() {
    let app = app();
    for date in ["2026-10-13", "2027-06-01"] {
        let (status, body) = send(&app, get(&format!("/salon/availability?date={}", date))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 2);
    }

    let (status, _) = send(&app, get("/salon/availability?date=2026-11-02")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_booking_end_to_end() {
    let app = app();
    let (status, body) = send(
        &app,
        with_json(
            Method::POST,
            "/bookings",
            json!({
                "serviceId": "srv_01",
                "date": "2026-10-20",
                "time": "14:00",
                "customerName": "Maria Santos",
                "customerPhone": "841234567"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["clientId"], "guest");
    assert_eq!(body["serviceName"], "Corte Feminino");
    assert_eq!(body["time"], "14:00");

    let (_, list) = send(&app, get("/bookings")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_booking_rejections() {
    let app = app();
    let booking = |date: &str, time: &str, name: &str| {
        json!({
            "serviceId": "srv_02",
            "date": date,
            "time": time,
            "customerName": name,
            "customerPhone": "841234567"
        })
    };

    // closing hour is not a slot
    let (status, _) = send(&app, with_json(Method::POST, "/bookings", booking("2026-10-20", "18:00", "Ana"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // beyond the 14 day window
    let (status, _) = send(&app, with_json(Method::POST, "/bookings", booking("2026-11-03", "10:00", "Ana"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, with_json(Method::POST, "/bookings", booking("2026-10-25", "10:00", "Ana"))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, with_json(Method::POST, "/bookings", booking("2026-10-20", "10:00", ""))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, get("/bookings")).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_reseller_quote_and_sale() {
    let app = app();
    let items = json!([
        { "itemType": "SERVICE", "itemId": "srv_04" },
        { "itemType": "SERVICE", "itemId": "srv_02" },
        { "itemType": "SERVICE", "itemId": "srv_05" }
    ]);

    let (status, quote) = send(
        &app,
        with_json(
            Method::POST,
            "/sales/quote",
            json!({ "buyerClass": "RESELLER", "items": items }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["policy"]["kind"], "TIER");
    assert_eq!(quote["policy"]["percent"], 25);
    assert_eq!(number(&quote["subtotal"]), 3000.0);
    assert_eq!(number(&quote["discountAmount"]), 750.0);

    let (status, sale) = send(
        &app,
        with_json(
            Method::POST,
            "/sales",
            json!({ "buyerClass": "RESELLER", "items": items, "resellerId": "res_1" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(number(&sale["total"]), 2250.0);
    assert_eq!(sale["buyerReference"], "Joana Machava (Revenda)");
    assert_eq!(sale["processedBy"], "usr_admin");
    assert_eq!(sale["date"], "2026-10-19");

    let (_, list) = send(&app, get("/sales")).await;
    assert_eq!(list[0]["id"], sale["id"]);
}

#[tokio::test]
async fn test_small_reseller_sale_is_refused() {
    let (status, body) = send(
        &app(),
        with_json(
            Method::POST,
            "/sales",
            json!({
                "buyerClass": "RESELLER",
                "items": [{ "itemType": "PRODUCT", "itemId": "CLR001" }],
                "resellerId": "res_1"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_sale_requires_operator() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/sales")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "buyerClass": "RETAIL",
                "items": [{ "itemType": "PRODUCT", "itemId": "CLR001" }]
            })
            .to_string(),
        ))
        .unwrap();

    let (status, _) = send(&app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_replace_config() {
    let app = app();
    let (_, mut config) = send(&app, get("/salon/config")).await;

    config["schedule"][0]["isOpen"] = json!(true);
    let (status, _) = send(&app, with_json(Method::PUT, "/salon/config", config.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get("/salon/availability?date=2026-10-25")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slots"].as_array().unwrap().len(), 6);

    config["bookingWindowDays"] = json!(0);
    let (status, body) = send(&app, with_json(Method::PUT, "/salon/config", config.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    config["bookingWindowDays"] = json!(4294967295u32);
    let (status, _) = send(&app, with_json(Method::PUT, "/salon/config", config)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // bookings still go through with the previous window
    let (status, _) = send(
        &app,
        with_json(
            Method::POST,
            "/bookings",
            json!({
                "serviceId": "srv_05",
                "date": "2026-10-21",
                "time": "10:00",
                "customerName": "Ana",
                "customerPhone": "841234567"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_reseller_registry() {
    let app = app();
    let (status, created) = send(
        &app,
        with_json(
            Method::POST,
            "/resellers",
            json!({
                "name": "Fátima Cossa",
                "email": "fatima@example.com",
                "phone": "823334455",
                "address": "Maputo"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["date"], "2026-10-19");

    let id = created["id"].as_str().unwrap();
    let delete = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/api/v1/resellers/{}", id))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, delete).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&app, get("/resellers")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}
