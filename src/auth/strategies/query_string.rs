use super::{non_empty, Strategy, DEFAULT_KEY};
use crate::auth::request::Request;

/// Reads the token from a query string or input parameter (`?token=...`).
#[derive(Debug, Clone)]
pub struct QueryString {
    key: String,
}

impl Default for QueryString {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

impl QueryString {
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

impl Strategy for QueryString {
    fn parse(&self, request: &dyn Request) -> Option<String> {
        non_empty(request.input(&self.key))
    }
}
