use serde_json::Value;

use super::{non_empty, Strategy, DEFAULT_KEY};
use crate::auth::request::{Request, RouteResolution};

/// Route parameter strategy that also understands the array form of a
/// resolved route: `[matched, action, parameters]`.
///
/// Routers built on `FastRoute` (Lumen being the best known) hand back that
/// array instead of a route object. Only that exact three element shape is
/// accepted; anything else is treated as no token.
#[derive(Debug, Clone)]
pub struct LumenRouteParams {
    key: String,
}

impl Default for LumenRouteParams {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

impl LumenRouteParams {
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

impl Strategy for LumenRouteParams {
    fn parse(&self, request: &dyn Request) -> Option<String> {
        let token = match request.route()? {
            RouteResolution::Route(route) => route.parameter(&self.key),
            array @ RouteResolution::Array(_) => {
                match array.array_parameters()?.get(&self.key)? {
                    Value::String(value) => Some(value.clone()),
                    Value::Number(value) => Some(value.to_string()),
                    _ => None,
                }
            }
        };
        non_empty(token)
    }
}
