//! Startup configuration for the app.
//!
//! Values are baked in at build time (`TOPICBOARD_*` environment variables
//! seen by the compiler). On native targets the process environment can
//! override them.

use topicboard_core::config::{AppConfig, DATABASE_URL_KEY, LANGUAGE_KEY, OAUTH_CLIENT_ID_KEY};

use crate::error::ConfigError;

fn build_time_value(key: &str) -> Option<&'static str> {
    match key {
        OAUTH_CLIENT_ID_KEY => option_env!("TOPICBOARD_OAUTH_CLIENT_ID"),
        LANGUAGE_KEY => option_env!("TOPICBOARD_LANGUAGE"),
        DATABASE_URL_KEY => option_env!("TOPICBOARD_DATABASE_URL"),
        _ => None,
    }
}

fn lookup(key: &str) -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(value) = std::env::var(key) {
        return Some(value);
    }

    build_time_value(key).map(str::to_string)
}

/// Reads the configuration once at startup.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_has_no_build_time_value() {
        assert!(build_time_value("TOPICBOARD_NOT_A_KEY").is_none());
    }
}
