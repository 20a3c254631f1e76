use super::{non_empty, Strategy, DEFAULT_KEY};
use crate::auth::request::Request;

/// Reads the token from a parameter of the matched route
/// (`/reset/{token}`).
///
/// Only a proper route object is consulted. The array form some routers
/// return is handled by [`LumenRouteParams`](super::LumenRouteParams).
#[derive(Debug, Clone)]
pub struct RouteParams {
    key: String,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

impl RouteParams {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.key = key.into();
        self
    }
}

impl Strategy for RouteParams {
    fn parse(&self, request: &dyn Request) -> Option<String> {
        let resolution = request.route()?;
        non_empty(resolution.as_route()?.parameter(&self.key))
    }
}
