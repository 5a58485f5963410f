//! UI components for the Topicboard application.
//!
//! - `app_shell`: SessionShell, Navbar, SearchBar, UserMenu
//! - `topics`: TopicList, TopicCard, CreateTopicDialog, TopicView, ReportView
//! - `login`: sign-in page
//! - `toast`: transient notifications
//!
//! # Context Providers
//!
//! The root [`App`] provides shared state through Dioxus context:
//!
//! ```ignore
//! let session = use_session();        // Signal<SessionState>
//! let route = use_route();            // Signal<Route>
//! let store = use_store();            // Memo<SharedStore>
//! let strings = use_strings();        // &'static Strings
//!
//! dispatch(session, SessionAction::ToggleShowArchived);
//! navigate(route, Route::TopicList);
//! ```

mod app_shell;
mod login;
mod toast;
mod topics;

pub use app_shell::SessionShell;
pub use login::Login;
pub use toast::{use_notifier, Notifier, ToastHost};
pub use topics::{CardKind, ReportView, TopicActions, TopicCard, TopicList, TopicView};

use dioxus::logger::tracing::{debug, error, info, warn};
use dioxus::prelude::*;
use futures_util::StreamExt;
use topicboard_core::auth::parse_redirect_fragment;
use topicboard_core::config::AppConfig;
use topicboard_core::routes::Route;
use topicboard_core::session::{reduce, SessionAction, SessionState};
use topicboard_core::strings::Strings;

use crate::config::load_config;
use crate::platform;
use crate::storage::{create_store, SharedStore};

/// Progress of the OAuth redirect round-trip.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthStatus {
    /// No sign-in in progress
    Idle,
    /// Token received, profile being fetched
    SigningIn,
    /// The provider or the profile request failed
    Failed(String),
}

// ============================================================================
// Context accessors
// ============================================================================

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_route() -> Signal<Route> {
    use_context::<Signal<Route>>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

pub fn use_strings() -> &'static Strings {
    use_context::<&'static Strings>()
}

/// Store for the current session; changes when the access token does.
pub fn use_store() -> Memo<SharedStore> {
    use_context::<Memo<SharedStore>>()
}

pub fn use_auth_status() -> Signal<AuthStatus> {
    use_context::<Signal<AuthStatus>>()
}

/// Applies `action` to the session state.
pub fn dispatch(mut session: Signal<SessionState>, action: SessionAction) {
    debug!("Session action {}", action.name());
    let next = reduce(&session.peek(), action);
    session.set(next);
}

/// Switches to `to` and mirrors it into the location fragment.
pub fn navigate(mut route: Signal<Route>, to: Route) {
    if let Err(e) = platform::set_fragment(&to.to_string()) {
        warn!("Failed to update location: {}", e);
    }
    if *route.peek() != to {
        route.set(to);
    }
}

/// Where the app starts, given the fragment it was loaded with.
///
/// An OAuth response in the fragment starts on the login page with the
/// token to exchange; anything else is an ordinary route.
fn initial_state(fragment: &str) -> (Route, AuthStatus, Option<String>) {
    match parse_redirect_fragment(fragment) {
        Ok(Some(token)) => (Route::Login, AuthStatus::SigningIn, Some(token)),
        Ok(None) => (Route::parse(fragment), AuthStatus::Idle, None),
        Err(e) => {
            warn!("Sign-in was not completed: {}", e);
            (Route::Login, AuthStatus::Failed(e.to_string()), None)
        }
    }
}

// ============================================================================
// Root component
// ============================================================================

/// Root component: loads the configuration, then mounts the dashboard.
#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);

    match config {
        Ok(config) => rsx! {
            Dashboard { config }
        },
        Err(e) => {
            error!("Invalid configuration: {}", e);
            rsx! {
                div { class: "tb-fatal",
                    h1 { "Topicboard is not configured" }
                    p { "{e}" }
                }
            }
        }
    }
}

#[component]
fn Dashboard(config: AppConfig) -> Element {
    let strings = config.locale.strings();
    use_context_provider(|| strings);
    use_context_provider(|| config.clone());

    let (initial_route, initial_auth, pending_token) =
        use_hook(|| initial_state(&platform::current_fragment()));

    let session = use_context_provider(|| Signal::new(SessionState::default()));
    let mut route = use_context_provider(|| Signal::new(initial_route));
    let mut auth_status = use_context_provider(|| Signal::new(initial_auth));
    use_context_provider(Notifier::new);

    // The REST store authenticates with the signed-in user's token
    let access_token = use_memo(move || {
        session
            .read()
            .user
            .as_ref()
            .and_then(|user| user.access_token.clone())
    });
    let store_config = config.clone();
    let store = use_memo(move || create_store(&store_config, access_token()));
    use_context_provider(|| store);

    // Finish the OAuth redirect
    use_hook(move || {
        let Some(token) = pending_token else {
            return;
        };
        // Keep the token out of the address bar and history
        if let Err(e) = platform::set_fragment(&Route::Login.to_string()) {
            warn!("Failed to clear the sign-in response from the URL: {}", e);
        }
        spawn(async move {
            match crate::auth::fetch_profile(&token).await {
                Ok(profile) => {
                    dispatch(session, SessionAction::SignedIn(profile));
                    auth_status.set(AuthStatus::Idle);
                    navigate(route, Route::TopicList);
                }
                Err(e) => {
                    error!("Sign-in failed: {}", e);
                    auth_status.set(AuthStatus::Failed(e.to_string()));
                }
            }
        });
    });

    // Back/forward buttons change the fragment without going through navigate()
    use_future(move || async move {
        match platform::hash_changes() {
            Ok(mut fragments) => {
                while let Some(fragment) = fragments.next().await {
                    let next = Route::parse(&fragment);
                    if *route.peek() != next {
                        info!("Location changed to {}", next);
                        route.set(next);
                    }
                }
            }
            Err(e) => debug!("Not following location changes: {}", e),
        }
    });

    let page = match route() {
        Route::Login => rsx! { Login {} },
        Route::Report { user_id, topic_id } => {
            let key = format!("{}/{}", user_id, topic_id);
            rsx! {
                ReportView { key: "{key}", user_id, topic_id }
            }
        }
        Route::TopicList => rsx! {
            SessionShell { TopicList {} }
        },
        Route::Topic {
            user_id,
            topic_id,
            page,
        } => {
            let key = format!("{}/{}", user_id, topic_id);
            rsx! {
                SessionShell {
                    TopicView { key: "{key}", user_id, topic_id, page }
                }
            }
        }
    };

    rsx! {
        div { class: "tb-app",
            {page}
            ToastHost {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topicboard_core::{TopicId, UserId};

    #[test]
    fn test_initial_state_plain_route() {
        let (route, auth, token) = initial_state("#/report/u1/t1");
        assert_eq!(
            route,
            Route::Report {
                user_id: UserId::new("u1"),
                topic_id: TopicId::new("t1"),
            }
        );
        assert_eq!(auth, AuthStatus::Idle);
        assert!(token.is_none());
    }

    #[test]
    fn test_initial_state_oauth_response() {
        let (route, auth, token) =
            initial_state("#access_token=ya29.x&token_type=Bearer&expires_in=3599");
        assert_eq!(route, Route::Login);
        assert_eq!(auth, AuthStatus::SigningIn);
        assert_eq!(token.as_deref(), Some("ya29.x"));
    }

    #[test]
    fn test_initial_state_oauth_error() {
        let (route, auth, token) = initial_state("error=access_denied");
        assert_eq!(route, Route::Login);
        assert!(matches!(auth, AuthStatus::Failed(_)));
        assert!(token.is_none());
    }

    #[test]
    fn test_initial_state_empty_fragment() {
        let (route, auth, _) = initial_state("");
        assert_eq!(route, Route::TopicList);
        assert_eq!(auth, AuthStatus::Idle);
    }
}
