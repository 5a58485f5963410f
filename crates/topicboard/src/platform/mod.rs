//! Platform-specific browser glue.
//!
//! Everything that touches `window` lives here, behind one function per
//! capability:
//!
//! - **Web**: `web_sys` location, clipboard and `gloo_timers`
//! - **Native**: tokio timers; browser-only calls return `PlatformError::Unsupported`
//!
//! Keeping the cfg blocks in this module lets components stay free of
//! `#[cfg(target_arch = "wasm32")]`.

use futures_channel::mpsc::UnboundedReceiver;
#[cfg(target_arch = "wasm32")]
use futures_channel::mpsc::unbounded;

use crate::error::PlatformError;

/// Origin used for report links when there is no browser location.
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_ORIGIN: &str = "http://localhost:8080";

#[cfg(target_arch = "wasm32")]
fn window() -> Result<web_sys::Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::BrowserApiUnavailable("window"))
}

/// The app's origin, e.g. `https://topics.example.com`.
#[cfg(target_arch = "wasm32")]
pub fn origin() -> String {
    window()
        .and_then(|w| w.location().origin().map_err(PlatformError::from))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn origin() -> String {
    NATIVE_ORIGIN.to_string()
}

/// URL the OAuth provider should send the user back to.
pub fn redirect_uri() -> String {
    format!("{}/", origin())
}

/// Current location fragment without the leading `#`.
#[cfg(target_arch = "wasm32")]
pub fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().map_err(PlatformError::from))
        .map(|hash| hash.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_fragment() -> String {
    String::new()
}

/// Mirrors the current route into the location fragment.
#[cfg(target_arch = "wasm32")]
pub fn set_fragment(path: &str) -> Result<(), PlatformError> {
    window()?.location().set_hash(path)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_fragment(_path: &str) -> Result<(), PlatformError> {
    Ok(())
}

/// Fragments the user navigates to with back/forward or by editing the URL.
///
/// Register once; the listener lives for the rest of the page.
#[cfg(target_arch = "wasm32")]
pub fn hash_changes() -> Result<UnboundedReceiver<String>, PlatformError> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let (sender, receiver) = unbounded();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        let _ = sender.unbounded_send(current_fragment());
    });
    window()?.set_onhashchange(Some(on_change.as_ref().unchecked_ref()));
    on_change.forget();
    Ok(receiver)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn hash_changes() -> Result<UnboundedReceiver<String>, PlatformError> {
    Err(PlatformError::Unsupported("hashchange"))
}

/// Copies `text` to the system clipboard.
#[cfg(target_arch = "wasm32")]
pub async fn copy_to_clipboard(text: &str) -> Result<(), PlatformError> {
    let clipboard = window()?.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn copy_to_clipboard(_text: &str) -> Result<(), PlatformError> {
    Err(PlatformError::Unsupported("clipboard"))
}

/// POSTs a urlencoded `form` to `url` without reading the response.
///
/// For endpoints that send no CORS headers. `Ok` only means the request
/// was sent; the opaque response hides its status.
#[cfg(target_arch = "wasm32")]
pub async fn send_form_no_cors(url: &str, form: &str) -> Result<(), PlatformError> {
    use web_sys::{RequestInit, RequestMode, UrlSearchParams};

    let body = UrlSearchParams::new_with_str(form)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::NoCors);
    init.set_body(&body.into());
    wasm_bindgen_futures::JsFuture::from(window()?.fetch_with_str_and_init(url, &init)).await?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn send_form_no_cors(_url: &str, _form: &str) -> Result<(), PlatformError> {
    Err(PlatformError::Unsupported("no-cors fetch"))
}

/// Async sleep that works on both runtimes.
pub async fn sleep_ms(millis: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(millis).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(millis as u64)).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_fallbacks() {
        assert_eq!(redirect_uri(), "http://localhost:8080/");
        assert_eq!(current_fragment(), "");
        assert!(set_fragment("/login").is_ok());
        assert!(hash_changes().is_err());
    }

    #[tokio::test]
    async fn test_native_clipboard_unsupported() {
        assert_eq!(
            copy_to_clipboard("x").await,
            Err(PlatformError::Unsupported("clipboard"))
        );
        assert_eq!(
            send_form_no_cors("https://example.com", "token=x").await,
            Err(PlatformError::Unsupported("no-cors fetch"))
        );
    }
}
