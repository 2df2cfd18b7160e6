use std::sync::Arc;

use axum::http::StatusCode;
use http_body_util::BodyExt;
use record_core::store::{MemoryStore, RedbStore, RowStore};
use tempfile::TempDir;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Store seeded with header rows and the given squat entries.
fn seeded_store(squats: &[&str]) -> Arc<MemoryStore> {
    let mut squat = vec!["Squat"];
    squat.extend_from_slice(squats);
    Arc::new(MemoryStore::with_columns([
        squat,
        vec!["Bench"],
        vec!["Deadlift"],
    ]))
}

/// POST a form-encoded body to `/sms` and return (status, content type, body text).
async fn post_form(app: axum::Router, form: &str) -> (StatusCode, String, String) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/sms")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(axum::body::Body::from(form.to_string()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

fn message(text: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><Response><Message>{text}</Message></Response>"#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_below_best_replies_with_gap() {
    let store = seeded_store(&["100", "120"]);
    let app = record_server::build_router(store.clone());

    let (status, ct, body) = post_form(app, "Body=set+squat+110&From=%2B15550001111").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct, "application/xml");
    assert_eq!(
        body,
        message(
            "Your new squat lift of 110.0 kg has been added. \
             You were 10.0 kg away from beating your best."
        )
    );
    assert_eq!(store.read_column(1).unwrap()[3], "110.0");
}

#[tokio::test]
async fn set_with_rep_notation_records_estimate() {
    let store = seeded_store(&[]);
    let app = record_server::build_router(store.clone());

    let (_, _, body) = post_form(app, "Body=Set+Squat+lift+5x100kg").await;

    assert!(body.contains("New squat PR!"), "{body}");
    assert_eq!(
        store.read_column(1).unwrap(),
        vec!["Squat", "116.66666666666667"]
    );
}

#[tokio::test]
async fn get_returns_best() {
    let store = seeded_store(&["100", "140", "120"]);
    let app = record_server::build_router(store);

    let (_, _, body) = post_form(app, "Body=get+squat").await;
    assert_eq!(body, message("Your highest squat is 140 kg."));
}

#[tokio::test]
async fn get_without_entries() {
    let app = record_server::build_router(seeded_store(&[]));
    let (_, _, body) = post_form(app, "Body=get+deadlift").await;
    assert_eq!(body, message("No PR recorded."));
}

#[tokio::test]
async fn unknown_command_gets_help() {
    let app = record_server::build_router(seeded_store(&[]));
    let (status, _, body) = post_form(app, "Body=hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        message(
            "Unknown command. Please use &apos;set&apos; or &apos;get&apos; \
             followed by the exercise and lift."
        )
    );
}

#[tokio::test]
async fn malformed_value_is_reported_in_reply() {
    let store = seeded_store(&[]);
    let app = record_server::build_router(store.clone());

    let (status, _, body) = post_form(app, "Body=set+bench+abc").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<Message>An error occurred:"), "{body}");
    assert_eq!(store.read_column(2).unwrap(), vec!["Bench"]);
}

#[tokio::test]
async fn missing_body_field_gets_help() {
    let app = record_server::build_router(seeded_store(&[]));
    let (status, _, body) = post_form(app, "From=%2B15550001111").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Unknown command."));
}

#[tokio::test]
async fn non_form_request_still_replies() {
    let app = record_server::build_router(seeded_store(&[]));
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/sms")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(r#"{"Body":"get squat"}"#))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_is_not_routed() {
    let app = record_server::build_router(seeded_store(&[]));
    let req = axum::http::Request::builder()
        .uri("/sms")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn redb_store_persists_across_routers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lifts.redb");
    {
        let store: Arc<dyn RowStore> = Arc::new(RedbStore::open(&path).unwrap());
        let app = record_server::build_router(store.clone());
        post_form(app, "Body=set+deadlift+200").await;
        let app = record_server::build_router(store);
        post_form(app, "Body=set+deadlift+180kg").await;
    }

    let store: Arc<dyn RowStore> = Arc::new(RedbStore::open(&path).unwrap());
    assert_eq!(
        store.read_column(3).unwrap(),
        vec!["Deadlift", "200.0", "180.0"]
    );
    let app = record_server::build_router(store);
    let (_, _, body) = post_form(app, "Body=get+deadlift").await;
    assert_eq!(body, message("Your highest deadlift is 200.0 kg."));
}
