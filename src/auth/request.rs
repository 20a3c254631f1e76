//! What a token strategy is allowed to read from an incoming request.
//!
//! The locator never owns the HTTP machinery. It only needs three lookups
//! from a request (a header, an input parameter, the matched route) and one
//! lookup from a route (a named parameter). Anything that can answer those
//! can be parsed, which keeps the strategies testable without a server.
use std::{fmt, sync::Arc};

use serde_json::Value;

/// Read access to the request currently being authenticated.
pub trait Request {
    /// Returns the value of the header `name`. Header names are matched
    /// case-insensitively.
    fn header(&self, name: &str) -> Option<String>;

    /// Returns the query string or request input parameter `name`.
    fn input(&self, name: &str) -> Option<String>;

    /// Returns how the router resolved the current request, if it resolved
    /// it at all.
    fn route(&self) -> Option<RouteResolution>;
}

/// A matched route.
pub trait Route: fmt::Debug + Send + Sync {
    /// Returns the route parameter bound to `name`.
    fn parameter(&self, name: &str) -> Option<String>;
}

/// The outcome of route resolution for a request.
#[derive(Debug, Clone)]
pub enum RouteResolution {
    /// A proper route object.
    Route(Arc<dyn Route>),
    /// The array form some routers hand back instead of a route object:
    /// `[matched, action, parameters]`. Kept as raw JSON so that malformed
    /// shapes can still be represented.
    Array(Value),
}

impl RouteResolution {
    /// Wrap a route object.
    pub fn route<T: Route + 'static>(route: T) -> Self {
        Self::Route(Arc::new(route))
    }

    /// Returns the route object, or `None` for the array form.
    #[must_use]
    pub fn as_route(&self) -> Option<&dyn Route> {
        match self {
            Self::Route(route) => Some(route.as_ref()),
            Self::Array(_) => None,
        }
    }

    /// Returns the `parameters` mapping of a well formed
    /// `[matched, action, parameters]` array.
    #[must_use]
    pub fn array_parameters(&self) -> Option<&serde_json::Map<String, Value>> {
        match self {
            Self::Array(Value::Array(items)) if items.len() == 3 => items[2].as_object(),
            _ => None,
        }
    }
}

impl<R: Request + ?Sized> Request for &R {
    fn header(&self, name: &str) -> Option<String> {
        (**self).header(name)
    }

    fn input(&self, name: &str) -> Option<String> {
        (**self).input(name)
    }

    fn route(&self) -> Option<RouteResolution> {
        (**self).route()
    }
}
