mod common;

use axum::http::StatusCode;
use common::{get, json_body, post_json, post_raw, send, session_cookie, text_body};
use sara_backend::db::{insert_point, NewPoint};
use sara_backend::geolocation::AWAIT_TIMEOUT;
use sara_backend::map::TILE_URL;
use serde_json::json;

#[tokio::test]
async fn test_pages_are_served() {
    let app = common::app_with(common::migrated_db().await);

    let map = send(&app, get("/", None)).await;
    assert_eq!(map.status(), StatusCode::OK);
    assert!(text_body(map).await.contains("leaflet"));

    let form = send(&app, get("/form", None)).await;
    assert_eq!(form.status(), StatusCode::OK);
    assert!(text_body(form).await.contains("Finalizar cadastro"));
}

#[tokio::test]
async fn test_categories_default_to_all_selected() {
    let app = common::app_with(common::migrated_db().await);

    let body = json_body(send(&app, get("/api/categories", None)).await).await;

    let options = body["options"].as_array().unwrap();
    assert_eq!(options.len(), 6);
    assert!(options.iter().all(|o| o["selected"] == true));
    assert_eq!(body["legend"][0]["icon_url"], "/assets/img/pin_1.png");
}

#[tokio::test]
async fn test_capture_and_submit_point() {
    let app = common::app_with(common::migrated_db().await);

    let response = send(&app, post_json("/api/location/request", None, &json!({}))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    assert_eq!(json_body(response).await["phase"], "awaiting");

    let report = json!({"coords": {"latitude": 1.0, "longitude": 2.0}});
    let response = send(&app, post_json("/api/location/report", Some(&cookie), &report)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get("/api/location/await", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let result = json_body(response).await;
    assert_eq!(result["status"], "resolved");
    assert_eq!(result["latitude"], 1.0);
    assert_eq!(result["longitude"], 2.0);

    let state = json_body(send(&app, get("/api/location", Some(&cookie))).await).await;
    assert_eq!(state["phase"], "idle");
    assert_eq!(state["latitude"], 1.0);

    let submission = json!({"category": 2, "name": "Sucata na praça", "classification_code": "Classe II"});
    let response = send(&app, post_json("/api/points", Some(&cookie), &submission)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let points = json_body(send(&app, get("/api/points", None)).await).await;
    let points = points.as_array().unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0]["category"], 2);
    assert_eq!(points[0]["name"], "Sucata na praça");
    assert_eq!(points[0]["classification_code"], "Classe II");
    assert_eq!(points[0]["latitude"], 1.0);
    assert_eq!(points[0]["longitude"], 2.0);
    assert!(points[0]["registration_date"].is_string());
}

#[tokio::test]
async fn test_denied_location_blocks_submission() {
    let app = common::app_with(common::migrated_db().await);

    let response = send(&app, post_json("/api/location/request", None, &json!({}))).await;
    let cookie = session_cookie(&response);

    let report = json!({"error": "Permission denied by user"});
    send(&app, post_json("/api/location/report", Some(&cookie), &report)).await;

    let result = json_body(send(&app, get("/api/location/await", Some(&cookie))).await).await;
    assert_eq!(result["status"], "denied");
    assert!(result["latitude"].is_null());

    let submission = json!({"category": 1, "name": "Pneus"});
    let response = send(&app, post_json("/api/points", Some(&cookie), &submission)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Capture a localização antes de finalizar."
    );

    let points = json_body(send(&app, get("/api/points", None)).await).await;
    assert!(points.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_name_blocks_submission() {
    let app = common::app_with(common::migrated_db().await);

    let response = send(&app, post_json("/api/location/request", None, &json!({}))).await;
    let cookie = session_cookie(&response);
    let report = json!({"latitude": -15.8, "longitude": -48.1});
    send(&app, post_json("/api/location/report", Some(&cookie), &report)).await;
    send(&app, get("/api/location/await", Some(&cookie))).await;

    let submission = json!({"category": 1, "name": ""});
    let response = send(&app, post_json("/api/points", Some(&cookie), &submission)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Informe o nome do ponto.");

    let points = json_body(send(&app, get("/api/points", None)).await).await;
    assert!(points.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_submission_without_session_is_blocked() {
    let app = common::app_with(common::migrated_db().await);

    let submission = json!({"category": 1, "name": "Pneus"});
    let response = send(&app, post_json("/api/points", None, &submission)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_report_without_request_conflicts() {
    let app = common::app_with(common::migrated_db().await);

    let report = json!({"latitude": 1.0, "longitude": 2.0});
    let response = send(&app, post_json("/api/location/report", None, &report)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(&app, get("/api/location/await", None)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_malformed_report_counts_as_no_data() {
    let app = common::app_with(common::migrated_db().await);

    let response = send(&app, post_json("/api/location/request", None, &json!({}))).await;
    let cookie = session_cookie(&response);

    let response = send(&app, post_raw("/api/location/report", Some(&cookie), "{not json".to_string())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let report = json!({"coords": {"latitude": 3.0, "longitude": 4.0}});
    send(&app, post_json("/api/location/report", Some(&cookie), &report)).await;

    let result = json_body(send(&app, get("/api/location/await", Some(&cookie))).await).await;
    assert_eq!(result["status"], "resolved");
    assert_eq!(result["latitude"], 3.0);
}

#[tokio::test(start_paused = true)]
async fn test_location_times_out() {
    let app = common::app_with(sea_orm::DatabaseConnection::Disconnected);

    // The wait is bounded from the moment of the request, not of the await
    let started = tokio::time::Instant::now();
    let response = send(&app, post_json("/api/location/request", None, &json!({}))).await;
    let cookie = session_cookie(&response);
    send(&app, post_json("/api/location/report", Some(&cookie), &json!(null))).await;

    let result = json_body(send(&app, get("/api/location/await", Some(&cookie))).await).await;

    assert_eq!(result["status"], "timed_out");
    assert!(result["latitude"].is_null());
    assert!(started.elapsed() >= AWAIT_TIMEOUT);

    let state = json_body(send(&app, get("/api/location", Some(&cookie))).await).await;
    assert_eq!(state["phase"], "idle");
    assert!(state["latitude"].is_null());
}

#[tokio::test]
async fn test_map_view_filters_and_centers() {
    let db = common::migrated_db().await;
    for (category, lat, lng) in [(1, -15.0, -48.0), (2, -16.0, -47.0), (9, 0.0, 0.0)] {
        let point = NewPoint {
            category,
            name: format!("Ponto {}", category),
            classification_code: None,
            latitude: lat,
            longitude: lng,
            registration_date: None,
        };
        insert_point(&db, point).await.unwrap();
    }
    let app = common::app_with(db);

    // Default selection covers the enumerated categories only
    let view = json_body(send(&app, get("/api/map", None)).await).await;
    assert_eq!(view["markers"].as_array().unwrap().len(), 2);
    assert_eq!(view["center"]["latitude"], -15.5);
    assert_eq!(view["center"]["longitude"], -47.5);
    assert_eq!(view["zoom"], 13);
    assert_eq!(view["tile_url"], TILE_URL);

    let view = json_body(send(&app, get("/api/map?categories=9", None)).await).await;
    let markers = view["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 1);
    assert!(markers[0]["popup_html"].as_str().unwrap().contains("Pin 9"));
    assert_eq!(markers[0]["icon_url"], "/assets/img/pin_9.png");

    let view = json_body(send(&app, get("/api/map?categories=", None)).await).await;
    assert!(view["center"].is_null());
    assert!(view["markers"].as_array().unwrap().is_empty());
    assert!(view["message"].is_string());

    let response = send(&app, get("/api/map?categories=abc", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let all = json_body(send(&app, get("/api/points", None)).await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}
