use dioxus::prelude::*;
use topicboard_core::auth::authorization_url;
use topicboard_core::routes::Route;

use crate::components::{
    navigate, use_auth_status, use_config, use_route, use_session, use_strings, AuthStatus,
};
use crate::platform;

/// Sign-in page. The button is a plain link to the provider's consent screen.
#[component]
pub fn Login() -> Element {
    let config = use_config();
    let strings = &use_strings().login;
    let auth_status = use_auth_status();
    let session = use_session();
    let route = use_route();

    // Already signed in: nothing to do here
    use_effect(move || {
        if session.read().is_signed_in() {
            navigate(route, Route::TopicList);
        }
    });

    let sign_in_url = authorization_url(&config.oauth_client_id, &platform::redirect_uri());
    let status = match auth_status.read().clone() {
        AuthStatus::SigningIn => rsx! {
            p { class: "tb-login-progress", "{strings.signing_in}" }
        },
        AuthStatus::Failed(reason) => rsx! {
            p { class: "tb-login-error", title: "{reason}", "{strings.sign_in_failed}" }
            a { class: "tb-btn tb-btn--primary", href: "{sign_in_url}", "{strings.sign_in_button}" }
        },
        AuthStatus::Idle => rsx! {
            a { class: "tb-btn tb-btn--primary", href: "{sign_in_url}", "{strings.sign_in_button}" }
        },
    };

    rsx! {
        div { class: "tb-login",
            section { class: "tb-login-card",
                h1 { class: "tb-login-title", "{strings.title}" }
                p { class: "tb-login-subtitle", "{strings.subtitle}" }
                {status}
            }
        }
    }
}
