mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_json_body() {
    let server = common::api_server(common::create_test_state());

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://www.freecodecamp.org" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "original_url": "https://www.freecodecamp.org", "short_url": 1 })
    );
}

#[tokio::test]
async fn test_shorten_form_body() {
    let server = common::api_server(common::create_test_state());

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.freecodecamp.org")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["original_url"], "https://www.freecodecamp.org");
    assert_eq!(body["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let server = common::api_server(common::create_test_state());

    let first = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.freecodecamp.org")])
        .await;
    let other = server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com/page")])
        .await;
    let again = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://www.freecodecamp.org" }))
        .await;

    assert_eq!(first.json::<Value>()["short_url"], 1);
    assert_eq!(other.json::<Value>()["short_url"], 2);
    assert_eq!(again.json::<Value>()["short_url"], 1);
}

#[tokio::test]
async fn test_shorten_invalid_url_default_status() {
    let server = common::api_server(common::create_test_state());

    for url in ["not a url", "ftp://example.com/file", "https://localhost"] {
        let response = server
            .post("/api/shorturl")
            .json(&json!({ "url": url }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK, "url: {url}");
        assert_eq!(response.json::<Value>(), json!({ "error": "invalid url" }));
    }
}

#[tokio::test]
async fn test_shorten_invalid_url_bad_request_status() {
    let server =
        common::api_server(common::create_test_state_with_status(StatusCode::BAD_REQUEST));

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "example")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "invalid url");
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let server = common::api_server(common::create_test_state());

    let empty_json = server.post("/api/shorturl").json(&json!({})).await;
    assert_eq!(empty_json.json::<Value>()["error"], "invalid url");

    let no_body = server.post("/api/shorturl").await;
    assert_eq!(no_body.status_code(), StatusCode::OK);
    assert_eq!(no_body.json::<Value>()["error"], "invalid url");

    let wrong_type = server
        .post("/api/shorturl")
        .json(&json!({ "url": 42 }))
        .await;
    assert_eq!(wrong_type.json::<Value>()["error"], "invalid url");
}

#[tokio::test]
async fn test_rejected_url_consumes_no_id() {
    let server = common::api_server(common::create_test_state());

    server
        .post("/api/shorturl")
        .form(&[("url", "not a url")])
        .await;

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com")])
        .await;

    assert_eq!(response.json::<Value>()["short_url"], 1);
}

#[tokio::test]
async fn test_redirect_to_original() {
    let server = common::api_server(common::create_test_state());

    server
        .post("/api/shorturl")
        .form(&[("url", "https://www.freecodecamp.org/news?page=2")])
        .await;

    let response = server.get("/api/shorturl/1").await;

    assert_eq!(response.status_code(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header("location"),
        "https://www.freecodecamp.org/news?page=2"
    );
}

#[tokio::test]
async fn test_redirect_unknown_id() {
    let server = common::api_server(common::create_test_state());

    for path in ["/api/shorturl/999", "/api/shorturl/abc", "/api/shorturl/0", "/api/shorturl/-1"] {
        let response = server.get(path).await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "path: {path}");
        assert_eq!(response.json::<Value>(), json!({ "error": "Not Found" }));
    }
}
