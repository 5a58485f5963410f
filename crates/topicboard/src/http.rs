//! Shared HTTP client.
//!
//! reqwest works on both targets (hyper + rustls on native, `fetch()` in the
//! browser). One pooled client serves the database store and the OAuth
//! calls.

use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    let builder = reqwest::Client::builder();

    // The browser owns timeouts and the user agent for fetch()
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder
        .user_agent(concat!("Topicboard/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS));

    builder.build().unwrap_or_else(|e| {
        warn!("Falling back to default HTTP client: {}", e);
        reqwest::Client::new()
    })
});

pub fn client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}
