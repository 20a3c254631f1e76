//! Token extraction strategies.
//!
//! Each strategy knows one place where a bearer token may travel. The
//! [`Parser`](super::Parser) tries them in chain order and keeps the first
//! token found.
use std::{fmt, sync::Arc};

use super::request::Request;
use crate::config::TokenLocation;

mod auth_headers;
mod lumen_route_params;
mod query_string;
mod route_params;

pub use auth_headers::AuthHeaders;
pub use lumen_route_params::LumenRouteParams;
pub use query_string::QueryString;
pub use route_params::RouteParams;

/// The parameter key used by key based strategies unless configured
/// otherwise.
pub const DEFAULT_KEY: &str = "token";

/// An ordered list of strategies. Order is priority.
pub type Chain = Arc<Vec<Box<dyn Strategy>>>;

/// One way of pulling a token out of a request.
///
/// A strategy never fails: a request that does not carry a token where the
/// strategy looks simply yields `None`.
pub trait Strategy: fmt::Debug + Send + Sync {
    fn parse(&self, request: &dyn Request) -> Option<String>;
}

/// The chain used when none is given: authorization header, then query
/// string, then route parameter.
#[must_use]
pub fn default_chain() -> Chain {
    let strategies: Vec<Box<dyn Strategy>> = vec![
        Box::new(AuthHeaders::default()),
        Box::new(QueryString::default()),
        Box::new(RouteParams::default()),
    ];
    Arc::new(strategies)
}

/// Build a chain from configured token locations, keeping their order.
#[must_use]
pub fn chain_from_locations<'a, I>(locations: I) -> Chain
where
    I: IntoIterator<Item = &'a TokenLocation>,
{
    Arc::new(
        locations
            .into_iter()
            .map(|location| -> Box<dyn Strategy> {
                match location {
                    TokenLocation::Bearer { header, prefix } => {
                        let mut strategy = AuthHeaders::default();
                        if let Some(header) = header {
                            strategy = strategy.with_header_name(header);
                        }
                        if let Some(prefix) = prefix {
                            strategy = strategy.with_prefix(prefix);
                        }
                        Box::new(strategy)
                    }
                    TokenLocation::Query { name } => Box::new(QueryString::new(name)),
                    TokenLocation::Route { name } => Box::new(RouteParams::new(name)),
                    TokenLocation::LumenRoute { name } => Box::new(LumenRouteParams::new(name)),
                }
            })
            .collect(),
    )
}

/// Strategies treat an empty value the same as a missing one.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
