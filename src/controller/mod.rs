//! HTTP side of the crate.
//!
//! [`extractor::auth`] runs the token [`Parser`](crate::auth::Parser) against
//! incoming axum requests. A missing token becomes [`Error::Unauthorized`],
//! which renders as a `401` with a JSON body.
//!
//! # Example
//!
//! ```rust
//! use jwt_token_parser::{
//!     app::AppContext,
//!     controller::extractor::auth::BearerToken,
//! };
//! use axum::{routing::get, Router};
//!
//! async fn current(BearerToken(token): BearerToken) -> String {
//!     format!("token length: {}", token.len())
//! }
//!
//! fn routes() -> Router<AppContext> {
//!     Router::new().route("/current", get(current))
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{errors::Error, Result};

pub mod extractor;

/// Fail with [`Error::Unauthorized`] carrying `msg`. The message is logged,
/// never sent to the client.
///
/// # Errors
///
/// Always.
pub fn unauthorized<T: Into<String>, U>(msg: T) -> Result<U> {
    Err(Error::Unauthorized(msg.into()))
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub error: String,
    pub description: String,
}

impl ErrorDetail {
    #[must_use]
    pub fn new(error: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            description: description.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Unauthorized(reason) => {
                tracing::warn!(reason = %reason, "unauthorized");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorDetail::new(
                        "unauthorized",
                        "You do not have permission to access this resource",
                    ),
                )
            }
            err => {
                tracing::error!(error.msg = %err, error.details = ?err, "controller_error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetail::new("internal_server_error", "Internal Server Error"),
                )
            }
        };
        (status, Json(detail)).into_response()
    }
}
