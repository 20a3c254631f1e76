//! initialization application logger.
use serde::{Deserialize, Serialize};
use serde_variant::to_variant_name;
use tracing_subscriber::EnvFilter;

use crate::config;

// Define an enumeration for log levels
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub enum LogLevel {
    /// The "off" level.
    #[serde(rename = "off")]
    Off,
    /// The "trace" level.
    #[serde(rename = "trace")]
    Trace,
    /// The "debug" level.
    #[serde(rename = "debug")]
    Debug,
    /// The "info" level.
    #[serde(rename = "info")]
    #[default]
    Info,
    /// The "warn" level.
    #[serde(rename = "warn")]
    Warn,
    /// The "error" level.
    #[serde(rename = "error")]
    Error,
}

// Define an enumeration for log formats
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub enum Format {
    #[serde(rename = "compact")]
    #[default]
    Compact,
    #[serde(rename = "pretty")]
    Pretty,
    #[serde(rename = "json")]
    Json,
}

// Implement Display trait for LogLevel to enable pretty printing
impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        to_variant_name(self).map_err(|_| std::fmt::Error)?.fmt(f)
    }
}

const MODULE_WHITELIST: &[&str] = &["jwt_token_parser"];

/// Build the tracing filter for `config`.
///
/// Tracing filtering rules:
/// 1. if `RUST_LOG`, use that filter
/// 2. if we have a config, and in it `override_filter` use that filter (ignore
///    all else)
/// 3. take `MODULE_WHITELIST` and filter only events from these modules, use
///    `config.level` on each to filter their events
///
/// # Errors
///
/// Returns an error when `override_filter` is not a valid filter directive.
pub fn filter(config: &config::Logger) -> crate::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| {
            config.override_filter.as_ref().map_or_else(
                || {
                    EnvFilter::try_new(
                        MODULE_WHITELIST
                            .iter()
                            .map(|m| format!("{}={}", m, config.level))
                            .collect::<Vec<_>>()
                            .join(","),
                    )
                },
                EnvFilter::try_new,
            )
        })
        .map_err(|err| crate::Error::Message(format!("logger initialization failed: {err}")))
}

/// Install the global tracing subscriber described by `config`. Does nothing
/// when logging is disabled or a subscriber is already installed.
///
/// # Errors
///
/// Returns an error when the filter cannot be built.
pub fn init(config: &config::Logger) -> crate::Result<()> {
    if !config.enable {
        return Ok(());
    }

    let builder = tracing_subscriber::FmtSubscriber::builder().with_env_filter(filter(config)?);

    let installed = match config.format {
        Format::Compact => builder.compact().try_init(),
        Format::Pretty => builder.pretty().try_init(),
        Format::Json => builder.json().try_init(),
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn can_display_level() {
        assert_eq!(LogLevel::Debug.to_string(), "debug");
        assert_eq!(LogLevel::default().to_string(), "info");
    }

    #[test]
    #[serial]
    fn whitelist_filter_uses_level() {
        std::env::remove_var("RUST_LOG");
        let config = config::Logger {
            enable: true,
            level: LogLevel::Trace,
            format: Format::Compact,
            override_filter: None,
        };
        let filter = filter(&config).expect("filter").to_string();
        assert!(filter.contains("jwt_token_parser=trace"));
        assert!(!filter.contains("tower_http"));
    }

    #[test]
    #[serial]
    fn override_filter_wins() {
        std::env::remove_var("RUST_LOG");
        let config = config::Logger {
            enable: true,
            level: LogLevel::Info,
            format: Format::Json,
            override_filter: Some("warn".to_string()),
        };
        assert_eq!(filter(&config).expect("filter").to_string(), "warn");
    }

    #[test]
    fn disabled_logger_is_a_noop() {
        assert!(init(&config::Logger::default()).is_ok());
    }
}
