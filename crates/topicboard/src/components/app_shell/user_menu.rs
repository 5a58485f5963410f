use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use topicboard_core::routes::Route;
use topicboard_core::session::SessionAction;

use crate::auth;
use crate::components::{dispatch, navigate, use_route, use_session, use_strings};

const USER_PLACEHOLDER: Asset = asset!("/assets/user.svg");

/// Avatar button with a dropdown holding the profile and the sign-out button.
#[component]
pub fn UserMenu() -> Element {
    let session = use_session();
    let route = use_route();
    let strings = &use_strings().navbar;
    let mut open = use_signal(|| false);
    let mut signing_out = use_signal(|| false);

    let Some(user) = session.read().user.clone() else {
        return rsx! {};
    };
    let avatar = user
        .image_url
        .clone()
        .unwrap_or_else(|| USER_PLACEHOLDER.to_string());

    let handle_sign_out = move |_| {
        signing_out.set(true);
        let token = session
            .peek()
            .user
            .as_ref()
            .and_then(|user| user.access_token.clone());

        spawn(async move {
            if let Some(token) = token {
                // The local session is cleared even when the provider can't be reached
                if let Err(e) = auth::revoke(&token).await {
                    warn!("Token revoke failed, signing out locally: {}", e);
                }
            }
            info!("Signed out");
            open.set(false);
            signing_out.set(false);
            navigate(route, Route::Login);
            dispatch(session, SessionAction::SignedOut);
        });
    };

    rsx! {
        div { class: "tb-user-menu",
            button {
                class: "tb-avatar-button",
                "aria-haspopup": "true",
                "aria-expanded": "{open}",
                onclick: move |_| open.set(!open()),
                img { class: "tb-avatar", src: "{avatar}", alt: strings.profile_alt }
            }

            if open() {
                div { class: "tb-user-dropdown",
                    img {
                        class: "tb-avatar tb-avatar--large",
                        src: "{avatar}",
                        alt: strings.profile_alt,
                    }
                    div { class: "tb-user-name", "{user.name}" }
                    div { class: "tb-user-email", "{user.email}" }
                    button {
                        class: "tb-btn tb-btn--secondary",
                        disabled: signing_out(),
                        onclick: handle_sign_out,
                        "{strings.logout_button}"
                    }
                }
            }
        }
    }
}
