use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::integration::common::{
    SCHEDULE_PAGE, setup_test_app, setup_with_remote, unreachable_remote,
};

async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app(None);
    let (status, json) = get_json(app.router.clone(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn static_provider_is_default() {
    let app = setup_test_app(Some(SCHEDULE_PAGE));
    let (status, json) = get_json(app.router.clone(), "/api/events").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["provider"], "static");
    assert!(json["timestamp"].is_string());
    assert!(json.get("error").is_none());

    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["title"], "קורס טרום מעשי");
    assert_eq!(events[0]["eventType"], "טרום מעשי");
    assert_eq!(events[0]["dayOfWeek"], "ב׳");
    assert_eq!(events[0]["startTime"], "14:00");
    assert_eq!(events[0]["moreUrl"], "https://club.example/course/1");
    assert_eq!(events[1]["title"], "שיעור תלמידים");
    assert_eq!(events[1]["eventType"], "תלמידים");
    assert_eq!(events[1]["date"], "");
    assert_eq!(events[1]["orderUrl"], "");
}

#[tokio::test]
async fn branch_and_category_filters() {
    let app = setup_test_app(Some(SCHEDULE_PAGE));

    let (_, json) = get_json(
        app.router.clone(),
        "/api/events?branch=%D7%AA%D7%9C%20%D7%90%D7%91%D7%99%D7%91",
    )
    .await;
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["branch"], "תל אביב");

    let (_, json) = get_json(app.router.clone(), "/api/events?category=pre-practical").await;
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["eventType"], "טרום מעשי");
}

#[tokio::test]
async fn unknown_provider_falls_back_to_static() {
    let app = setup_test_app(Some(SCHEDULE_PAGE));
    let (status, json) = get_json(app.router.clone(), "/api/events?provider=ftp").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["provider"], "static");
}

#[tokio::test]
async fn wrong_shape_page_returns_no_events() {
    let app = setup_test_app(Some("<html><body><h1>Not Found</h1></body></html>"));
    let (status, json) = get_json(app.router.clone(), "/api/events").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["events"], serde_json::json!([]));
}

#[tokio::test]
async fn missing_fixture_returns_500_envelope() {
    let app = setup_test_app(None);
    let (status, json) = get_json(app.router.clone(), "/api/events").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "file_error");
    assert_eq!(json["provider"], "static");
    assert_eq!(json["events"], serde_json::json!([]));
    assert!(json["message"].as_str().unwrap().contains("sailing_events.html"));
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn markup_free_fixture_is_a_parse_error() {
    let app = setup_test_app(Some("sailing schedule unavailable"));
    let (status, json) = get_json(app.router.clone(), "/api/events").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "parse_error");
}

#[tokio::test]
async fn remote_without_config_returns_500() {
    let app = setup_test_app(Some(SCHEDULE_PAGE));
    let (status, json) = get_json(app.router.clone(), "/api/events?provider=remote").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["provider"], "remote");
    assert_eq!(json["error"], "config_error");
}

#[tokio::test]
async fn remote_transport_failure_returns_500() {
    let app = setup_with_remote(Some(SCHEDULE_PAGE), Some(unreachable_remote()));
    let (status, json) = get_json(app.router.clone(), "/api/events?provider=remote").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["provider"], "remote");
    let kind = json["error"].as_str().unwrap();
    assert!(["network_error", "http_error", "timeout"].contains(&kind));
    assert!(!json["message"].as_str().unwrap().contains("test-key"));
}
