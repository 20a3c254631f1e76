use crate::{
    app::AppContext,
    config::{Config, TokenLocation},
    environment::Environment,
    tests_cfg::config::{test_config, with_locations},
};

#[must_use]
pub fn get_app_context() -> AppContext {
    with_config(test_config())
}

#[must_use]
pub fn with_config(config: Config) -> AppContext {
    AppContext::new(Environment::Test, config)
}

#[must_use]
pub fn get_app_context_with_locations(locations: Vec<TokenLocation>) -> AppContext {
    with_config(with_locations(locations))
}
