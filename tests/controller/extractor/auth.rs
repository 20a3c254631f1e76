use std::collections::HashMap;

use axum::{
    body::Body,
    http::Request,
    middleware::map_request,
    routing::{get, post},
    Form, Router,
};
use jwt_token_parser::{
    app::AppContext,
    auth::{Parser, RouteResolution},
    config::TokenLocation,
    controller::extractor::auth::{BearerToken, HttpRequest},
    tests_cfg,
};
use serde_json::json;

use crate::infra_cfg::server;

async fn token_handler(BearerToken(token): BearerToken) -> String {
    token
}

async fn optional_token_handler(token: Option<BearerToken>) -> String {
    token.map_or_else(|| "anonymous".to_string(), |BearerToken(token)| token)
}

async fn form_token_handler(
    request: HttpRequest,
    Form(fields): Form<HashMap<String, String>>,
) -> String {
    Parser::new(request.with_input(fields))
        .parse_token()
        .unwrap_or_else(|| "anonymous".to_string())
}

fn app(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(token_handler))
        .route("/form", post(form_token_handler))
        .route("/reset/{token}", get(token_handler))
        .route("/custom/{custom_route_param}", get(token_handler))
        .route("/optional", get(optional_token_handler))
        .with_state(ctx)
}

fn locations(names: &[&str]) -> Vec<TokenLocation> {
    names
        .iter()
        .map(|name| match *name {
            "bearer" => TokenLocation::Bearer {
                header: None,
                prefix: None,
            },
            "query" => TokenLocation::Query {
                name: "token".to_string(),
            },
            "route" => TokenLocation::Route {
                name: "token".to_string(),
            },
            "custom_route" => TokenLocation::Route {
                name: "custom_route_param".to_string(),
            },
            "lumen_route" => TokenLocation::LumenRoute {
                name: "token".to_string(),
            },
            other => panic!("unknown location {other}"),
        })
        .collect()
}

#[tokio::test]
async fn can_extract_from_authorization_header() {
    let app = app(tests_cfg::app::get_app_context());

    let (status, body) = server::send(
        app,
        server::get("/", &[("Authorization", "Bearer foobar")]),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body, "foobar");
}

#[tokio::test]
async fn can_extract_from_server_header_variants() {
    let app = app(tests_cfg::app::get_app_context());

    let (_, body) = server::send(
        app.clone(),
        server::get("/", &[("HTTP_AUTHORIZATION", "Bearer foobar")]),
    )
    .await;
    assert_eq!(body, "foobar");

    let (_, body) = server::send(
        app,
        server::get("/", &[("REDIRECT_HTTP_AUTHORIZATION", "Bearer foobarbaz")]),
    )
    .await;
    assert_eq!(body, "foobarbaz");
}

#[tokio::test]
async fn can_extract_from_query_string() {
    let app = app(tests_cfg::app::get_app_context());

    let (status, body) = server::send(app, server::get("/?token=foobar&other=param", &[])).await;

    assert_eq!(status, 200);
    assert_eq!(body, "foobar");
}

#[tokio::test]
async fn can_extract_from_route_parameter() {
    let app = app(tests_cfg::app::get_app_context());

    let (status, body) = server::send(app, server::get("/reset/foobar", &[])).await;

    assert_eq!(status, 200);
    assert_eq!(body, "foobar");
}

#[tokio::test]
async fn can_extract_from_configured_route_parameter() {
    let ctx = tests_cfg::app::get_app_context_with_locations(locations(&[
        "bearer",
        "query",
        "custom_route",
    ]));
    let app = app(ctx);

    let (status, body) = server::send(app.clone(), server::get("/custom/foobar", &[])).await;
    assert_eq!(status, 200);
    assert_eq!(body, "foobar");

    // `token` is no longer a route key in this chain
    let (status, _) = server::send(app, server::get("/reset/foobar", &[])).await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn configured_order_decides_precedence() {
    let request = || {
        server::get(
            "/?token=from_query",
            &[("Authorization", "Bearer from_header")],
        )
    };

    let app_default = app(tests_cfg::app::get_app_context());
    let (_, body) = server::send(app_default, request()).await;
    assert_eq!(body, "from_header");

    let query_first = app(tests_cfg::app::get_app_context_with_locations(locations(
        &["query", "bearer"],
    )));
    let (_, body) = server::send(query_first, request()).await;
    assert_eq!(body, "from_query");
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = app(tests_cfg::app::get_app_context());

    let (status, body) = server::send(
        app,
        server::get("/?other=param", &[("Authorization", "Basic dXNlcjpwYXNz")]),
    )
    .await;

    assert_eq!(status, 401);
    let body: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(
        body,
        json!({
            "error": "unauthorized",
            "description": "You do not have permission to access this resource"
        })
    );
}

#[tokio::test]
async fn empty_token_is_unauthorized() {
    let app = app(tests_cfg::app::get_app_context());

    let (status, _) = server::send(app, server::get("/?token=", &[])).await;

    assert_eq!(status, 401);
}

#[tokio::test]
async fn optional_token_allows_anonymous_requests() {
    let app = app(tests_cfg::app::get_app_context());

    let (status, body) = server::send(app.clone(), server::get("/optional", &[])).await;
    assert_eq!(status, 200);
    assert_eq!(body, "anonymous");

    let (status, body) = server::send(app, server::get("/optional?token=foobar", &[])).await;
    assert_eq!(status, 200);
    assert_eq!(body, "foobar");
}

async fn array_resolution(mut request: Request<Body>) -> Request<Body> {
    request
        .extensions_mut()
        .insert(RouteResolution::Array(json!([
            false,
            {"uses": "someController"},
            {"token": "foo.bar.baz"}
        ])));
    request
}

#[tokio::test]
async fn array_route_resolution_needs_lumen_location() {
    let plain = app(tests_cfg::app::get_app_context_with_locations(locations(
        &["bearer", "query", "route"],
    )))
    .layer(map_request(array_resolution));
    let (status, _) = server::send(plain, server::get("/", &[])).await;
    assert_eq!(status, 401);

    let lumen = app(tests_cfg::app::get_app_context_with_locations(locations(
        &["bearer", "query", "lumen_route"],
    )))
    .layer(map_request(array_resolution));
    let (status, body) = server::send(lumen, server::get("/", &[])).await;
    assert_eq!(status, 200);
    assert_eq!(body, "foo.bar.baz");
}

#[tokio::test]
async fn form_fields_count_once_added_as_input() {
    let app = app(tests_cfg::app::get_app_context());

    let (status, body) =
        server::send(app.clone(), server::post_form("/form", "token=from_form")).await;
    assert_eq!(status, 200);
    assert_eq!(body, "from_form");

    let (_, body) = server::send(
        app.clone(),
        server::post_form("/form?token=from_query", "token=from_form"),
    )
    .await;
    assert_eq!(body, "from_query");

    let (_, body) = server::send(app, server::post_form("/form", "other=value")).await;
    assert_eq!(body, "anonymous");
}

#[tokio::test]
async fn bearer_token_with_inner_whitespace_is_unauthorized() {
    let app = app(tests_cfg::app::get_app_context());

    let (status, _) = server::send(
        app,
        server::get("/", &[("Authorization", "Bearer foo bar")]),
    )
    .await;

    assert_eq!(status, 401);
}
