use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use bersih_db::{MemoryStore, TweetStore};
use bersih_test_utils::{
    multipart_body, multipart_content_type, sample_normaliser, temp_repository, tweet_csv, Part,
};
use bersih_web::{router::build_router, state::AppState};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(store: Arc<dyn TweetStore>) -> Router {
    build_router(AppState::new(sample_normaliser(), store))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("handler should respond");
    let status = response.status();
    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be collected")
        .to_bytes();
    let body_text = std::str::from_utf8(body_bytes.as_ref()).unwrap_or("<non-utf8>");
    let value: Value = serde_json::from_slice(body_bytes.as_ref())
        .unwrap_or_else(|err| panic!("invalid json: {err}; body={body_text}"));
    (status, value)
}

fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/text-processing-file")
        .header(CONTENT_TYPE, multipart_content_type())
        .body(Body::from(multipart_body(parts)))
        .expect("request builder must not fail")
}

#[tokio::test]
async fn text_processing_returns_alphanumeric_and_stores_raw() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with(store.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/text-processing")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("text=Halo%2C+Dunia%21+%40user+50%25"))
        .expect("request builder must not fail");

    let (status, value) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value,
        json!({
            "status_code": 200,
            "description": "Teks yang sudah diproses",
            "data": "Halo  Dunia   user 50 ",
        })
    );
    assert_eq!(store.rows(), vec!["Halo, Dunia! @user 50%"]);
}

#[tokio::test]
async fn text_processing_accepts_multipart() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with(store.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/text-processing")
        .header(CONTENT_TYPE, multipart_content_type())
        .body(Body::from(multipart_body(&[Part::Text { name: "text", value: "gw-bego" }])))
        .expect("request builder must not fail");

    let (status, value) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["data"], "gw bego");
    assert_eq!(store.rows(), vec!["gw-bego"]);
}

#[tokio::test]
async fn text_processing_without_text_field_fails() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with(store.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/text-processing")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("other=1"))
        .expect("request builder must not fail");

    let (status, value) = send(app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(value["status_code"], 500);
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn text_processing_keeps_first_repeated_field() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with(store.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/text-processing")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("text=pertama&text=kedua"))
        .expect("request builder must not fail");

    let (status, value) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["data"], "pertama");
    assert_eq!(store.rows(), vec!["pertama"]);
}

#[tokio::test]
async fn file_processing_dedups_cleanses_and_stores() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with(store.clone());

    let csv = tweet_csv(&[
        "RT USER: Gw kesel bgt, BEGO!",
        "Selamat pagi &amp; semangat",
        "RT USER: Gw kesel bgt, BEGO!",
        "Diskon 50% di https://t.co/x",
    ]);
    let request = upload_request(&[Part::File { name: "file", filename: "data.csv", content: &csv }]);

    let (status, value) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["status_code"], 200);
    let expected = vec!["gw kesel bgt ", "selamat pagi dan semangat", "diskon persen di"];
    assert_eq!(value["data"], json!(expected));
    assert_eq!(store.rows(), expected);
}

#[tokio::test]
async fn file_processing_without_tweet_column_writes_nothing() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with(store.clone());

    let csv = b"text,HS\nhalo,0\n";
    let request = upload_request(&[Part::File { name: "file", filename: "data.csv", content: csv }]);

    let (status, value) = send(app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(value["description"], "Missing column: Tweet");
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn file_processing_without_file_field_fails() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with(store.clone());

    let request = upload_request(&[Part::Text { name: "text", value: "halo" }]);
    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(store.rows().is_empty());
}

#[tokio::test]
async fn file_processing_persists_to_sqlite() {
    let (_dir, repo) = temp_repository();
    let app = app_with(Arc::new(repo.clone()));

    let csv = tweet_csv(&["satu", "dua", "satu"]);
    let request = upload_request(&[Part::File { name: "file", filename: "data.csv", content: &csv }]);
    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(repo.list().unwrap(), vec!["satu", "dua"]);
}

#[tokio::test]
async fn docs_json_uses_request_host() {
    let app = app_with(Arc::new(MemoryStore::new()));

    let request = Request::builder()
        .method("GET")
        .uri("/docs.json")
        .header("host", "bersih.local:5000")
        .body(Body::empty())
        .expect("request builder must not fail");

    let (status, value) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["host"], "bersih.local:5000");
    assert_eq!(value["info"]["title"], "API Documentation for Data Processing and Modeling");
}

#[tokio::test]
async fn docs_ui_serves_swagger_page() {
    let app = app_with(Arc::new(MemoryStore::new()));

    let request = Request::builder()
        .method("GET")
        .uri("/docs/")
        .body(Body::empty())
        .expect("request builder must not fail");

    let response = app.oneshot(request).await.expect("handler should respond");
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be collected")
        .to_bytes();
    let html = std::str::from_utf8(body_bytes.as_ref()).expect("page must be utf-8");
    assert!(html.contains("/docs.json"), "got {html}");
    assert!(html.contains("#swagger-ui"));
}

#[tokio::test]
async fn healthz_returns_ok_json() {
    let app = app_with(Arc::new(MemoryStore::new()));

    let request = Request::builder()
        .method("GET")
        .uri("/healthz")
        .body(Body::empty())
        .expect("request builder must not fail");

    let (status, value) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({ "status": "ok" }));
}
