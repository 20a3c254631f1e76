//! Shared application state handed to axum routers.
use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    auth::strategies::Chain,
    config::Config,
    environment::Environment,
    Result,
};

/// Represents the application context for a web server.
///
/// Extractors such as
/// [`BearerToken`](crate::controller::extractor::auth::BearerToken) read the
/// token chain from here, so any router state that can produce an
/// `AppContext` through [`FromRef`] works.
#[derive(Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct AppContext {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// Configuration settings for the application
    pub config: Config,
    /// Strategy chain built once from `config.auth.jwt.location`. Shared by
    /// every request.
    pub token_chain: Chain,
}

impl AppContext {
    #[must_use]
    pub fn new(environment: Environment, config: Config) -> Self {
        let token_chain = config.token_chain();
        Self {
            environment,
            config,
            token_chain,
        }
    }

    /// Load the configuration for `environment`, initialize the logger and
    /// build the context.
    ///
    /// # Errors
    ///
    /// When the configuration cannot be loaded or the logger filter is
    /// invalid.
    pub fn boot(environment: Environment) -> Result<Self> {
        let config = Config::new(&environment)?;
        crate::logger::init(&config.logger)?;
        tracing::info!(environment = %environment, "application context ready");
        Ok(Self::new(environment, config))
    }

    /// [`boot`](Self::boot) the environment named by `APP_ENV` or
    /// `RUST_ENV`.
    ///
    /// # Errors
    ///
    /// See [`boot`](Self::boot).
    pub fn boot_from_env() -> Result<Self> {
        Self::boot(Environment::from_env())
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("environment", &self.environment)
            .field("token_chain", &self.token_chain)
            .finish_non_exhaustive()
    }
}

impl FromRef<AppContext> for Config {
    fn from_ref(ctx: &AppContext) -> Self {
        ctx.config.clone()
    }
}

impl FromRef<AppContext> for Chain {
    fn from_ref(ctx: &AppContext) -> Self {
        Arc::clone(&ctx.token_chain)
    }
}
