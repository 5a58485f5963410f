//! Startup configuration and production constants.
//!
//! Configuration is read once at startup from a key lookup (build-time
//! environment on the web, process environment on desktop) and never
//! changes afterwards.
//!
//! # Usage
//!
//! ```
//! use topicboard_core::config::AppConfig;
//!
//! let config = AppConfig::from_lookup(|key| match key {
//!     "TOPICBOARD_OAUTH_CLIENT_ID" => Some("client.apps.example".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//! assert!(config.database_url.is_none());
//! ```

use crate::error::ConfigError;
use crate::strings::Locale;

// =============================================================================
// Store Layout
// =============================================================================

/// Root of every user's topic subtree (`topics/{userId}/{topicId}`).
pub const TOPICS_ROOT: &str = "topics";

/// How often the REST store re-reads a subscribed subtree.
pub const SUBSCRIPTION_POLL_INTERVAL_MS: u32 = 2_000;

// =============================================================================
// UI
// =============================================================================

/// Toasts dismiss themselves after this long.
pub const TOAST_AUTO_CLOSE_MS: u32 = 3_000;

/// Close animation length of the creation dialog.
pub const MODAL_CLOSE_TIMEOUT_MS: u32 = 500;

// =============================================================================
// Environment Keys
// =============================================================================

pub const OAUTH_CLIENT_ID_KEY: &str = "TOPICBOARD_OAUTH_CLIENT_ID";
pub const LANGUAGE_KEY: &str = "TOPICBOARD_LANGUAGE";
pub const DATABASE_URL_KEY: &str = "TOPICBOARD_DATABASE_URL";

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// OAuth client identifier for the sign-in provider
    pub oauth_client_id: String,
    /// Active UI language
    pub locale: Locale,
    /// Base URL of the hosted realtime database, e.g. `https://x.firebaseio.com`
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Resolves the configuration from a key lookup.
    ///
    /// Blank values count as missing. The language defaults to English.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let oauth_client_id =
            get(OAUTH_CLIENT_ID_KEY).ok_or(ConfigError::Missing(OAUTH_CLIENT_ID_KEY))?;

        let locale = match get(LANGUAGE_KEY) {
            Some(value) => value.parse::<Locale>().map_err(|_| ConfigError::Invalid {
                key: LANGUAGE_KEY,
                value,
            })?,
            None => Locale::default(),
        };

        let database_url = match get(DATABASE_URL_KEY) {
            Some(value) => {
                url::Url::parse(&value).map_err(|_| ConfigError::Invalid {
                    key: DATABASE_URL_KEY,
                    value: value.clone(),
                })?;
                Some(value.trim_end_matches('/').to_string())
            }
            None => None,
        };

        Ok(Self {
            oauth_client_id,
            locale,
            database_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::from_lookup(lookup(&[
            (OAUTH_CLIENT_ID_KEY, "abc.apps"),
            (LANGUAGE_KEY, "HU"),
            (DATABASE_URL_KEY, "https://topics-db.firebaseio.com/"),
        ]))
        .unwrap();

        assert_eq!(config.oauth_client_id, "abc.apps");
        assert_eq!(config.locale, Locale::Hu);
        assert_eq!(
            config.database_url.as_deref(),
            Some("https://topics-db.firebaseio.com")
        );
    }

    #[test]
    fn test_missing_client_id() {
        let err = AppConfig::from_lookup(lookup(&[(OAUTH_CLIENT_ID_KEY, "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(OAUTH_CLIENT_ID_KEY));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(OAUTH_CLIENT_ID_KEY, "abc")])).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let bad_lang = AppConfig::from_lookup(lookup(&[
            (OAUTH_CLIENT_ID_KEY, "abc"),
            (LANGUAGE_KEY, "klingon"),
        ]))
        .unwrap_err();
        assert!(matches!(bad_lang, ConfigError::Invalid { key: LANGUAGE_KEY, .. }));

        let bad_url = AppConfig::from_lookup(lookup(&[
            (OAUTH_CLIENT_ID_KEY, "abc"),
            (DATABASE_URL_KEY, "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(bad_url, ConfigError::Invalid { key: DATABASE_URL_KEY, .. }));
    }
}
