//! The token locator.
//!
//! A [`Parser`] holds the request being authenticated and an ordered
//! [`Chain`] of strategies. [`Parser::parse_token`] walks the chain and
//! returns the first token found. Both the request and the chain can be
//! swapped between calls; nothing is cached, so every call reflects the
//! current state.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use jwt_token_parser::auth::{
//!     strategies::{AuthHeaders, QueryString, RouteParams, Strategy},
//!     Parser, Request, RouteResolution,
//! };
//!
//! struct Incoming;
//!
//! impl Request for Incoming {
//!     fn header(&self, name: &str) -> Option<String> {
//!         name.eq_ignore_ascii_case("authorization")
//!             .then(|| "Bearer foobar".to_string())
//!     }
//!
//!     fn input(&self, _name: &str) -> Option<String> {
//!         None
//!     }
//!
//!     fn route(&self) -> Option<RouteResolution> {
//!         None
//!     }
//! }
//!
//! let chain: Vec<Box<dyn Strategy>> = vec![
//!     Box::new(QueryString::default()),
//!     Box::new(AuthHeaders::default()),
//!     Box::new(RouteParams::default()),
//! ];
//! let parser = Parser::with_chain(Incoming, Arc::new(chain));
//! assert_eq!(parser.parse_token(), Some("foobar".to_string()));
//! ```
use super::{
    request::Request,
    strategies::{default_chain, Chain},
};

pub struct Parser<R> {
    request: R,
    chain: Chain,
}

impl<R: Request> Parser<R> {
    /// Create a parser over `request` using the [`default_chain`].
    pub fn new(request: R) -> Self {
        Self::with_chain(request, default_chain())
    }

    pub fn with_chain(request: R, chain: Chain) -> Self {
        Self { request, chain }
    }

    /// The chain as last set. This is the same [`Chain`] handle that was
    /// passed in, not a copy.
    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Replace the whole chain.
    pub fn set_chain(&mut self, chain: Chain) -> &mut Self {
        self.chain = chain;
        self
    }

    /// Alias of [`Parser::set_chain`].
    pub fn set_chain_order(&mut self, chain: Chain) -> &mut Self {
        self.set_chain(chain)
    }

    #[must_use]
    pub fn request(&self) -> &R {
        &self.request
    }

    /// Replace the request used by later calls to [`Parser::parse_token`].
    pub fn set_request(&mut self, request: R) -> &mut Self {
        self.request = request;
        self
    }

    /// Try every strategy in chain order and return the first non empty
    /// token. Returns `None` when the chain is empty or nothing matched.
    #[must_use]
    pub fn parse_token(&self) -> Option<String> {
        for strategy in self.chain.iter() {
            match strategy.parse(&self.request) {
                Some(token) if !token.is_empty() => {
                    tracing::debug!(strategy = ?strategy, "token found");
                    return Some(token);
                }
                _ => tracing::trace!(strategy = ?strategy, "no token"),
            }
        }
        tracing::debug!(strategies = self.chain.len(), "no token found in chain");
        None
    }

    /// Whether [`Parser::parse_token`] would currently return a token.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.parse_token().is_some()
    }
}

impl<R> std::fmt::Debug for Parser<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}
