pub use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};

pub use crate::{
    app::AppContext,
    auth::{
        strategies::{
            default_chain, AuthHeaders, Chain, LumenRouteParams, QueryString, RouteParams,
            Strategy,
        },
        Parser, Request, Route, RouteResolution,
    },
    controller::{
        extractor::auth::{BearerToken, HttpRequest, MatchedRoute},
        unauthorized,
    },
    environment::Environment,
    errors::Error,
    Result,
};
