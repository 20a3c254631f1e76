//! # Configuration Management
//!
//! This module defines the configuration structures and functions to manage and
//! load configuration settings for the application.

/***
=============
CONTRIBUTORS:
=============

Here's a check list when adding configuration values:

* Add the new configuration piece
* Document each field with the appropriate rustdoc comment
* Update the yaml examples in the rustdoc of the owning struct

Notes:
* Configuration is "stage" dependent: development, test, production
* A missing `auth.jwt.location` is valid, the default chain is used

***/

use std::path::{Path, PathBuf};

use fs_err as fs;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{
    auth::strategies::{self, Chain, DEFAULT_KEY},
    environment::Environment,
    logger, Error, Result,
};

lazy_static! {
    static ref DEFAULT_FOLDER: PathBuf = PathBuf::from("config");
}

/// Main application configuration structure.
///
/// This struct encapsulates various configuration settings. The configuration
/// can be customized through YAML files for different environments.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logger: Logger,
    pub auth: Option<Auth>,
}

/// Logger configuration
///
/// Example (development):
/// ```yaml
/// # config/development.yaml
/// logger:
///   enable: true
///   level: debug
///   format: compact
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Logger {
    /// Enable log write to stdout
    pub enable: bool,

    /// Set the logger level.
    ///
    /// * options: `trace` | `debug` | `info` | `warn` | `error`
    pub level: logger::LogLevel,

    /// Set the logger format.
    ///
    /// * options: `compact` | `pretty` | `json`
    pub format: logger::Format,

    /// Override our custom tracing filter.
    ///
    /// Set this to your own filter if you want to see traces from internal
    /// libraries. See more [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives)
    pub override_filter: Option<String>,
}

/// User authentication configuration.
///
/// Example (development):
/// ```yaml
/// # config/development.yaml
/// auth:
///   jwt:
///     location:
///       - from: Bearer
///       - from: Query
///         name: token
///       - from: Route
///         name: token
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Auth {
    /// JWT authentication config
    pub jwt: Option<JWT>,
}

/// JWT configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JWT {
    /// Where tokens are looked up during authentication, in priority order.
    /// When missing, the default chain is used.
    #[serde(default)]
    pub location: Option<JWTLocationConfig>,
}

impl JWT {
    /// Build the strategy chain described by `location`.
    #[must_use]
    pub fn chain(&self) -> Chain {
        match &self.location {
            Some(JWTLocationConfig::Single(location)) => {
                strategies::chain_from_locations(std::iter::once(location))
            }
            Some(JWTLocationConfig::Multiple(locations)) => {
                strategies::chain_from_locations(locations)
            }
            None => strategies::default_chain(),
        }
    }
}

/// One location or an ordered list of them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum JWTLocationConfig {
    Single(TokenLocation),
    Multiple(Vec<TokenLocation>),
}

/// Defines where a token may be found in a request.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "from")]
pub enum TokenLocation {
    /// `Authorization: Bearer <token>`, with its server fallbacks.
    Bearer {
        /// Primary header name, `authorization` when missing.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        header: Option<String>,
        /// Credential prefix, `bearer` when missing.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
    },
    /// A query string or input parameter.
    Query {
        #[serde(default = "default_key")]
        name: String,
    },
    /// A parameter of the matched route.
    Route {
        #[serde(default = "default_key")]
        name: String,
    },
    /// A parameter of the matched route, also accepting the
    /// `[matched, action, parameters]` array form.
    LumenRoute {
        #[serde(default = "default_key")]
        name: String,
    },
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Config {
    /// Creates a new configuration instance based on the specified environment.
    ///
    /// # Errors
    ///
    /// Returns error when could not convert the give path to
    /// [`Config`] struct.
    pub fn new(env: &Environment) -> Result<Self> {
        let config = Self::from_folder(env, DEFAULT_FOLDER.as_path())?;
        Ok(config)
    }

    /// Loads configuration settings from a folder for the specified
    /// environment.
    ///
    /// # Errors
    /// Returns error when could not convert the give path to
    /// [`Config`] struct.
    pub fn from_folder(env: &Environment, path: &Path) -> Result<Self> {
        let files = env.config_files(path);
        let selected_path = files
            .iter()
            .find(|p| p.exists())
            .ok_or_else(|| Error::Message("no configuration file found".to_string()))?;

        info!(selected_path =? selected_path, "loading environment from");

        let content = fs::read_to_string(selected_path)?;
        let rendered = crate::tera::render_string(&content, &json!({}))?;

        serde_yaml::from_str(&rendered)
            .map_err(|err| Error::YAMLFile(err, selected_path.to_string_lossy().to_string()))
    }

    /// Get a reference to the JWT configuration.
    ///
    /// # Errors
    /// return an error when jwt token not configured
    pub fn get_jwt_config(&self) -> Result<&JWT> {
        self.auth
            .as_ref()
            .and_then(|auth| auth.jwt.as_ref())
            .map_or_else(
                || Err(Error::Any("no JWT config found".to_string().into())),
                Ok,
            )
    }

    /// The strategy chain to use for this configuration: the configured
    /// locations, or the default chain when JWT is not configured.
    #[must_use]
    pub fn token_chain(&self) -> Chain {
        self.get_jwt_config()
            .map_or_else(|_| strategies::default_chain(), JWT::chain)
    }
}
