//! Axum extractors for bearer tokens
//!
//! # Example:
//!
//! ```
//! use jwt_token_parser::{app::AppContext, controller::extractor::auth};
//! use axum::{routing::get, Router};
//!
//! async fn current(auth::BearerToken(token): auth::BearerToken) -> String {
//!     token
//! }
//!
//! async fn maybe(token: Option<auth::BearerToken>) -> &'static str {
//!     if token.is_some() { "authenticated" } else { "anonymous" }
//! }
//!
//! fn routes() -> Router<AppContext> {
//!     Router::new()
//!         .route("/current", get(current))
//!         .route("/reset/{token}", get(maybe))
//! }
//! ```
use std::{collections::HashMap, convert::Infallible};

use axum::{
    extract::{
        FromRef, FromRequestParts, MatchedPath, OptionalFromRequestParts, Query, RawPathParams,
    },
    http::{request::Parts, HeaderMap},
};

use crate::{
    app::AppContext,
    auth::{strategies::Chain, Parser, Request, Route, RouteResolution},
    controller::unauthorized,
    errors::Error,
};

// ---------------------------------------
//
// Request adapter
//
// ---------------------------------------

/// An axum request seen through the [`Request`] capabilities.
///
/// Route resolution comes from a [`RouteResolution`] request extension when
/// one was inserted (for example by a layer emulating another router), and
/// otherwise from axum's own [`MatchedPath`] and path parameters.
///
/// As an extractor it only sees request parts, so [`Request::input`] covers
/// the query string. Body fields count once a handler adds them with
/// [`with_input`](Self::with_input), for example from an `axum::Form` parsed
/// after this extractor.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    headers: HeaderMap,
    query: HashMap<String, String>,
    input: HashMap<String, String>,
    route: Option<RouteResolution>,
}

impl HttpRequest {
    /// Build from request parts. Path parameters need the async extractor,
    /// so only a [`RouteResolution`] extension or the [`MatchedPath`] is
    /// picked up here.
    #[must_use]
    pub fn from_parts(parts: &Parts) -> Self {
        let query = match Query::<HashMap<String, String>>::try_from_uri(&parts.uri) {
            Ok(Query(query)) => query,
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed query string");
                HashMap::new()
            }
        };

        let route = parts.extensions.get::<RouteResolution>().cloned().or_else(|| {
            parts
                .extensions
                .get::<MatchedPath>()
                .map(|path| RouteResolution::route(MatchedRoute::new(path.as_str())))
        });

        Self {
            headers: parts.headers.clone(),
            query,
            input: HashMap::new(),
            route,
        }
    }

    /// Add request input fields, such as a parsed form body. Query string
    /// values win over input fields with the same name.
    #[must_use]
    pub fn with_input<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.input
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn with_route(mut self, route: Option<RouteResolution>) -> Self {
        self.route = route;
        self
    }
}

impl Request for HttpRequest {
    fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    }

    fn input(&self, name: &str) -> Option<String> {
        self.query
            .get(name)
            .or_else(|| self.input.get(name))
            .cloned()
    }

    fn route(&self) -> Option<RouteResolution> {
        self.route.clone()
    }
}

impl<S> FromRequestParts<S> for HttpRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Infallible> {
        let request = Self::from_parts(parts);
        if parts.extensions.get::<RouteResolution>().is_some() {
            return Ok(request);
        }

        let path = parts
            .extensions
            .get::<MatchedPath>()
            .map(|path| path.as_str().to_string());
        let params = <RawPathParams as FromRequestParts<S>>::from_request_parts(parts, state)
            .await
            .ok();

        let route = match (path, params) {
            (None, None) => None,
            (path, params) => {
                let mut route = MatchedRoute::new(path.unwrap_or_default());
                if let Some(params) = params {
                    route = route.with_parameters(params.iter());
                }
                Some(RouteResolution::route(route))
            }
        };
        Ok(request.with_route(route))
    }
}

/// The route axum matched for a request.
#[derive(Debug, Clone, Default)]
pub struct MatchedRoute {
    path: String,
    parameters: HashMap<String, String>,
}

impl MatchedRoute {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parameters: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_parameters<'a, I>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.parameters.extend(
            parameters
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        self
    }

    /// The route pattern, such as `/reset/{token}`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Route for MatchedRoute {
    fn parameter(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }
}

// ---------------------------------------
//
// Bearer token extractor
//
// ---------------------------------------

/// The raw token found by the configured chain. The token is not validated.
///
/// Rejects with [`Error::Unauthorized`] when no strategy finds a token. Use
/// `Option<BearerToken>` when a token is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    AppContext: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Error> {
        let chain = AppContext::from_ref(state).token_chain;
        match extract_token(chain, parts, state).await {
            Some(token) => Ok(Self(token)),
            None => unauthorized(
                "Token not found in any of the configured locations. Please check your \
                 auth.jwt.location configuration.",
            ),
        }
    }
}

impl<S> OptionalFromRequestParts<S> for BearerToken
where
    AppContext: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Infallible> {
        let chain = AppContext::from_ref(state).token_chain;
        Ok(extract_token(chain, parts, state).await.map(Self))
    }
}

/// Run `chain` against the request described by `parts`.
pub async fn extract_token<S>(chain: Chain, parts: &mut Parts, state: &S) -> Option<String>
where
    S: Send + Sync,
{
    let request =
        match <HttpRequest as FromRequestParts<S>>::from_request_parts(parts, state).await {
            Ok(request) => request,
            Err(never) => match never {},
        };
    Parser::with_chain(request, chain).parse_token()
}
