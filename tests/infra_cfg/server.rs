//! # Request helpers for router tests
//!
//! Routers are driven in-process with `tower::ServiceExt::oneshot`, so no
//! port is bound.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

/// Build a GET request for `uri` with the given headers.
pub fn get(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
    headers
        .iter()
        .fold(Request::builder().uri(uri), |builder, (name, value)| {
            builder.header(*name, *value)
        })
        .body(Body::empty())
        .expect("request")
}

/// Build a url-encoded form POST for `uri`.
pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .expect("request")
}

/// Send `request` through `app` and return the status and body text.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}
