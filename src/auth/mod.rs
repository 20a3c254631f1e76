//! Bearer token location.
//!
//! [`Parser`] runs an ordered chain of [`strategies`] against a [`Request`]
//! and returns the first token found. Validating that token is left to the
//! caller.
pub mod parser;
pub mod request;
pub mod strategies;

pub use parser::Parser;
pub use request::{Request, Route, RouteResolution};
