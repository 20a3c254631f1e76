#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
//! ## Locating bearer tokens
//!
//! This crate finds the bearer token carried by an HTTP request. Tokens can
//! travel in several places: the `Authorization` header (or the server
//! variants of it some proxies produce), the query string, or a parameter
//! of the matched route. An ordered chain of strategies is tried and the
//! first token found wins.
//!
//! ```rust
//! use jwt_token_parser::{auth::Parser, tests_cfg::request::MockRequest};
//!
//! let request = MockRequest::new().with_input("token", "foobar");
//! let parser = Parser::new(request);
//! assert_eq!(parser.parse_token(), Some("foobar".to_string()));
//! assert!(parser.has_token());
//! ```
//!
//! In an axum application, use the
//! [`BearerToken`](controller::extractor::auth::BearerToken) extractor and
//! describe the chain in configuration:
//!
//! ```yaml
//! auth:
//!   jwt:
//!     location:
//!       - from: Bearer
//!       - from: Query
//!         name: token
//!       - from: Route
//!         name: token
//! ```
//!
//! ## Available Features
//!
//! | Feature   | Default | Description                                   |
//! |-----------|---------|-----------------------------------------------|
//! | `testing` | false   | Test Utilities Module (`tests_cfg`).          |
pub use self::errors::Error;

pub mod prelude;

pub mod app;
pub mod auth;
pub mod config;
pub mod controller;
pub mod environment;
pub mod errors;
pub mod logger;
mod tera;
#[cfg(any(test, feature = "testing"))]
pub mod tests_cfg;

/// Application results options list
pub type Result<T> = std::result::Result<T, Error>;
