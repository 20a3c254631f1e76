use crate::{
    config::{self, Config},
    logger,
};

#[must_use]
pub fn test_config() -> Config {
    Config {
        logger: config::Logger {
            enable: false,
            level: logger::LogLevel::Off,
            format: logger::Format::Json,
            override_filter: None,
        },
        auth: None,
    }
}

/// Test configuration with `auth.jwt.location` set to `locations`, in order.
#[must_use]
pub fn with_locations(locations: Vec<config::TokenLocation>) -> Config {
    Config {
        auth: Some(config::Auth {
            jwt: Some(config::JWT {
                location: Some(config::JWTLocationConfig::Multiple(locations)),
            }),
        }),
        ..test_config()
    }
}
