//! # Error Handling
//!
//! Locating a token never fails: strategies and the parser answer `None`.
//! Errors come from loading configuration and from the HTTP extractor when
//! no token was found.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Tera(#[from] tera::Error),

    #[error("cannot parse `{1}`: {0}")]
    YAMLFile(#[source] serde_yaml::Error, String),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    /// No strategy in the chain found a token.
    #[error("{0}")]
    Unauthorized(String),

    #[error(transparent)]
    Any(#[from] Box<dyn std::error::Error + Send + Sync>),
}
