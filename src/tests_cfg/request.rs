//! In-memory requests and routes for exercising strategies without a server.
use std::collections::HashMap;

use crate::auth::{Request, Route, RouteResolution};

#[derive(Debug, Clone, Default)]
pub struct MockRequest {
    headers: HashMap<String, String>,
    input: HashMap<String, String>,
    route: Option<RouteResolution>,
}

impl MockRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Header names are stored lowercased, matching HTTP semantics.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.input.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_route(self, route: MockRoute) -> Self {
        self.with_route_resolution(RouteResolution::route(route))
    }

    #[must_use]
    pub fn with_route_resolution(mut self, route: RouteResolution) -> Self {
        self.route = Some(route);
        self
    }
}

impl Request for MockRequest {
    fn header(&self, name: &str) -> Option<String> {
        self.headers.get(&name.to_ascii_lowercase()).cloned()
    }

    fn input(&self, name: &str) -> Option<String> {
        self.input.get(name).cloned()
    }

    fn route(&self) -> Option<RouteResolution> {
        self.route.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockRoute {
    parameters: HashMap<String, String>,
}

impl MockRoute {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.parameters.insert(name.to_string(), value.to_string());
        self
    }
}

impl Route for MockRoute {
    fn parameter(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }
}
