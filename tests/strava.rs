use axum::{
    body::to_bytes,
    extract::Path,
    http::{HeaderMap, Request, StatusCode},
    routing::get,
    Json, Router,
};
use flyby_rs::{config::Config, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const TOKEN: &str = "test-access-token";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {TOKEN}"))
        .unwrap_or(false)
}

fn activity_json(id: u64) -> Value {
    sport_json(id, "Run")
}

fn sport_json(id: u64, sport: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Activity {id}"),
        "type": sport,
        "sport_type": sport,
        "distance": 5000.0,
        "moving_time": 1500,
        "elapsed_time": 1600,
        "total_elevation_gain": 13.0,
        "start_date": "2024-01-21T09:17:36Z"
    })
}

/// Serves the handful of Strava API v3 endpoints the client calls.
async fn spawn_mock_strava() -> String {
    let app = Router::new()
        .route(
            "/athlete/activities",
            get(|headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return Err(StatusCode::UNAUTHORIZED);
                }
                Ok(Json(json!([
                    activity_json(11),
                    sport_json(13, "Ride"),
                    activity_json(12),
                    {"name": "no id"}
                ])))
            }),
        )
        .route(
            "/activities/:id",
            get(|Path(id): Path<u64>, headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return Err(StatusCode::UNAUTHORIZED);
                }
                if id == 404 {
                    return Err(StatusCode::NOT_FOUND);
                }
                Ok(Json(activity_json(id)))
            }),
        )
        .route(
            "/activities/:id/streams",
            get(|Path(id): Path<u64>, headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return Err(StatusCode::UNAUTHORIZED);
                }
                if id == 404 {
                    return Err(StatusCode::NOT_FOUND);
                }
                Ok(Json(json!({
                    "latlng": {"data": [[51.38, -2.36], [51.381, -2.359], [51.382, -2.358], [51.383, -2.357]]},
                    "time": {"data": [0, 30, 60, 90]},
                    "altitude": {"data": [100.0, 105.0, 102.0, 110.0]}
                })))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock");
    let addr = listener.local_addr().expect("mock addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });

    format!("http://{}", addr)
}

async fn app() -> Router {
    let base = spawn_mock_strava().await;
    let config = Config::from_env().with_strava_api_base(base);
    let state = AppState::new(config).expect("state");
    flyby_rs::router(state)
}

async fn send(app: Router, request: Request<axum::body::Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, String::from_utf8(body.to_vec()).expect("utf8"))
}

#[tokio::test]
async fn lists_activities_with_bearer_token() {
    let request = Request::builder()
        .uri("/api/activities?page=1")
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(axum::body::Body::empty())
        .expect("request");

    let (status, body) = send(app().await, request).await;

    assert_eq!(status, StatusCode::OK);
    let activities: Value = serde_json::from_str(&body).expect("json");
    let activities = activities.as_array().expect("array");
    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0]["id"], 11);
    assert_eq!(activities[0]["moving_time_s"], 1500);
    assert_eq!(activities[1]["sport_type"], "Ride");
    assert_eq!(activities[2]["start_date"], "2024-01-21T09:17:36Z");
}

#[tokio::test]
async fn sport_type_filter_keeps_matching_activities() {
    let request = Request::builder()
        .uri("/api/activities?sport_type=run")
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(axum::body::Body::empty())
        .expect("request");

    let (status, body) = send(app().await, request).await;

    assert_eq!(status, StatusCode::OK);
    let activities: Value = serde_json::from_str(&body).expect("json");
    let ids: Vec<u64> = activities
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|activity| activity["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![11, 12]);
}

#[tokio::test]
async fn sport_type_filter_without_match_is_empty() {
    let request = Request::builder()
        .uri("/api/activities?sport_type=Swim")
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(axum::body::Body::empty())
        .expect("request");

    let (status, body) = send(app().await, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn bearer_scheme_is_case_insensitive() {
    let request = Request::builder()
        .uri("/api/activities")
        .header("authorization", format!("bearer {TOKEN}"))
        .body(axum::body::Body::empty())
        .expect("request");

    let (status, _) = send(app().await, request).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() {
    let request = Request::builder()
        .uri("/api/activities")
        .header("authorization", format!("Basic {TOKEN}"))
        .body(axum::body::Body::empty())
        .expect("request");

    let (status, _) = send(app().await, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_bearer_token_is_unauthorized() {
    let request = Request::builder()
        .uri("/api/activities")
        .body(axum::body::Body::empty())
        .expect("request");

    let (status, body) = send(app().await, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("\"error\""));
}

#[tokio::test]
async fn rejected_token_maps_to_unauthorized() {
    let request = Request::builder()
        .uri("/api/activities")
        .header("authorization", "Bearer stale-token")
        .body(axum::body::Body::empty())
        .expect("request");

    let (status, _) = send(app().await, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn compares_two_fetched_activities() {
    let request = Request::builder()
        .uri("/api/compare")
        .method("POST")
        .header("authorization", format!("Bearer {TOKEN}"))
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            json!({ "first_id": 11, "second_id": 12 }).to_string(),
        ))
        .expect("request");

    let (status, body) = send(app().await, request).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let comparison: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(comparison["first"]["id"], 11);
    assert_eq!(comparison["second"]["name"], "Activity 12");
    assert_eq!(comparison["first"]["distance_km"], 5.0);
    assert_eq!(comparison["first"]["pace_display"], "5:00 /km");
    assert_eq!(comparison["first"]["total_elevation_gain_m"], 13.0);
    assert_eq!(comparison["first"]["profile"].as_array().expect("profile").len(), 4);
    assert_eq!(
        comparison["flyby"]["features"][0]["properties"]["times"][1],
        "2024-01-21T09:18:06Z"
    );
}

#[tokio::test]
async fn unknown_activity_is_not_found() {
    let request = Request::builder()
        .uri("/api/compare")
        .method("POST")
        .header("authorization", format!("Bearer {TOKEN}"))
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            json!({ "first_id": 11, "second_id": 404 }).to_string(),
        ))
        .expect("request");

    let (status, _) = send(app().await, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn exports_activity_as_gpx() {
    let request = Request::builder()
        .uri("/api/activity/11/gpx")
        .header("authorization", format!("Bearer {TOKEN}"))
        .body(axum::body::Body::empty())
        .expect("request");

    let app = app().await;
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/gpx+xml")
    );
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let document = String::from_utf8(body.to_vec()).expect("utf8");
    assert_eq!(document.matches("<trkpt ").count(), 4);
    assert!(document.contains("<name>Activity 11</name>"));
    assert!(document.contains("<time>2024-01-21T09:19:06Z</time>"));
}
