use super::{non_empty, Strategy};
use crate::auth::request::Request;

const AUTH_HEADER: &str = "authorization";
const TOKEN_PREFIX: &str = "bearer";

/// Headers set by some server and proxy setups when the authorization header
/// is not forwarded as is. Checked after the primary header, in this order.
const FALLBACK_HEADERS: &[&str] = &["HTTP_AUTHORIZATION", "REDIRECT_HTTP_AUTHORIZATION"];

/// Reads `Authorization: Bearer <token>`.
///
/// The prefix is matched case-insensitively and must be followed by
/// whitespace. The token is everything after it, trimmed. A credential with
/// whitespace inside the token is malformed and yields nothing. A header may
/// carry several comma separated credentials (`Basic abc, Bearer xyz`); the
/// first one with the prefix wins.
#[derive(Debug, Clone)]
pub struct AuthHeaders {
    header: String,
    prefix: String,
}

impl Default for AuthHeaders {
    fn default() -> Self {
        Self {
            header: AUTH_HEADER.to_string(),
            prefix: TOKEN_PREFIX.to_string(),
        }
    }
}

impl AuthHeaders {
    /// Replace the primary header name. The fallback headers are still
    /// checked after it.
    #[must_use]
    pub fn with_header_name(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Replace the credential prefix (`bearer` by default).
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn header_name(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn from_header_value(&self, value: &str) -> Option<String> {
        value.split(',').find_map(|credential| {
            let credential = credential.trim();
            let scheme = credential.get(..self.prefix.len())?;
            if !scheme.eq_ignore_ascii_case(&self.prefix) {
                return None;
            }
            let rest = &credential[self.prefix.len()..];
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let token = rest.trim();
            if token.contains(char::is_whitespace) {
                return None;
            }
            Some(token.to_string())
        })
    }
}

impl Strategy for AuthHeaders {
    fn parse(&self, request: &dyn Request) -> Option<String> {
        std::iter::once(self.header.as_str())
            .chain(FALLBACK_HEADERS.iter().copied())
            .find_map(|name| {
                request
                    .header(name)
                    .and_then(|value| non_empty(self.from_header_value(&value)))
            })
    }
}
