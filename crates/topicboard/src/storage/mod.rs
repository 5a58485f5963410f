//! Topic store backends for the app.
//!
//! Re-exports the store contract from `topicboard_core` and adds the hosted
//! backend:
//!
//! - **Configured database URL**: [`RealtimeDbStore`] talks to the hosted
//!   realtime database over REST
//! - **No database URL**: a process-wide [`InMemoryTopicStore`] so the UI can
//!   be tried without a backend (data is lost on reload)

pub mod realtime_db;

pub use realtime_db::RealtimeDbStore;
pub use topicboard_core::storage::{
    InMemoryTopicStore, StoreError, Subscription, TopicSnapshot, TopicStore,
};

use dioxus::logger::tracing::{info, warn};
use once_cell::sync::Lazy;
use std::sync::Arc;
use topicboard_core::config::AppConfig;

static DEMO_STORE: Lazy<Arc<InMemoryTopicStore>> = Lazy::new(|| {
    warn!("No database URL configured; topics are kept in memory only");
    Arc::new(InMemoryTopicStore::new())
});

/// Store handle shared through the component tree.
///
/// Two handles are equal when they point at the same store, which lets
/// memos holding a store skip re-renders when nothing changed.
#[derive(Clone)]
pub struct SharedStore(pub Arc<dyn TopicStore>);

impl PartialEq for SharedStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedStore {
    type Target = Arc<dyn TopicStore>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Picks the backend for the current session.
///
/// `access_token` is the signed-in user's OAuth token; the REST store sends
/// it with every request.
pub fn create_store(config: &AppConfig, access_token: Option<String>) -> SharedStore {
    match &config.database_url {
        Some(url) => {
            info!("Using realtime database at {}", url);
            SharedStore(Arc::new(RealtimeDbStore::new(url.clone(), access_token)))
        }
        None => SharedStore(DEMO_STORE.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topicboard_core::strings::Locale;

    fn config(database_url: Option<&str>) -> AppConfig {
        AppConfig {
            oauth_client_id: "client".to_string(),
            locale: Locale::En,
            database_url: database_url.map(str::to_string),
        }
    }

    #[test]
    fn test_demo_store_is_shared() {
        let a = create_store(&config(None), None);
        let b = create_store(&config(None), Some("tok".into()));
        assert!(a == b);
    }

    #[test]
    fn test_database_url_selects_rest_store() {
        let demo = create_store(&config(None), None);
        let rest = create_store(&config(Some("https://db.example.com")), None);
        assert!(demo != rest);
    }
}
