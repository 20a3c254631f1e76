//! Selects which `config/{env}.yaml` file set is loaded.
//!
//! ```rust
//! use jwt_token_parser::environment::Environment;
//!
//! let env = Environment::from("staging");
//! assert_eq!(env.to_string(), "staging");
//! assert!(env.config_files("config")[0].ends_with("staging.local.yaml"));
//! ```
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Checked first.
pub const APP_ENV: &str = "APP_ENV";
pub const RUST_ENV: &str = "RUST_ENV";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    Production,
    #[default]
    Development,
    Test,
    Any(String),
}

impl Environment {
    /// Read `APP_ENV`, then `RUST_ENV`, falling back to development.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(APP_ENV)
            .or_else(|_| std::env::var(RUST_ENV))
            .map_or_else(|_| Self::default(), Self::from)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Test => "test",
            Self::Any(name) => name,
        }
    }

    /// Candidate configuration files in `folder`, in order of precedence.
    #[must_use]
    pub fn config_files(&self, folder: impl AsRef<Path>) -> [PathBuf; 2] {
        let folder = folder.as_ref();
        [
            folder.join(format!("{self}.local.yaml")),
            folder.join(format!("{self}.yaml")),
        ]
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        match name {
            "production" => Self::Production,
            "development" => Self::Development,
            "test" => Self::Test,
            other => Self::Any(other.to_string()),
        }
    }
}

impl From<String> for Environment {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
