//! Error types for the Topicboard application.

use thiserror::Error;

pub use topicboard_core::error::{AuthError, ConfigError, StoreError, TopicError};

/// Errors from browser APIs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlatformError {
    /// `window` (or one of its objects) is not reachable
    #[error("Browser API unavailable: {0}")]
    BrowserApiUnavailable(&'static str),
    /// The browser rejected the call
    #[error("Browser call failed: {0}")]
    CallFailed(String),
    /// Not available on this platform
    #[error("Not supported on this platform: {0}")]
    Unsupported(&'static str),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PlatformError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::CallFailed(format!("{:?}", value))
    }
}
