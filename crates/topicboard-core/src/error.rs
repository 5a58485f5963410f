//! Error types for topicboard-core.
//!
//! Each concern gets its own enum. Everything a user can trigger ends up as a
//! [`TopicError`], which the UI turns into a toast.

use thiserror::Error;

pub use crate::storage::StoreError;

/// Errors raised by topic operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopicError {
    /// Topic name was empty
    #[error("Topic name must not be empty")]
    Validation,
    /// A topic with the same name already exists for this user
    #[error("A topic named '{0}' already exists")]
    DuplicateName(String),
    /// The store rejected a write
    #[error("Failed to save topic: {0}")]
    StoreWrite(String),
    /// The topic does not exist (or has not been synced yet)
    #[error("Topic not found: {0}")]
    NotFound(String),
    /// Read failed in the store
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur while resolving startup configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A required key was not provided
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),
    /// A key was provided but could not be parsed
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Errors that can occur while talking to the OAuth provider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// Redirect fragment did not carry a token
    #[error("No access token in redirect")]
    MissingToken,
    /// The provider returned an error in the redirect
    #[error("Sign-in was rejected: {0}")]
    Rejected(String),
    /// HTTP request to the provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// Provider response could not be decoded
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl From<TopicError> for String {
    fn from(err: TopicError) -> String {
        err.to_string()
    }
}
