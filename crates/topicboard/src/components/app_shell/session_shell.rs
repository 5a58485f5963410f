use dioxus::prelude::*;
use topicboard_core::routes::Route;

use super::Navbar;
use crate::components::{navigate, use_route, use_session};

/// Frame for pages that require a session.
///
/// Without a signed-in user nothing is rendered and the route switches to
/// the login page.
#[component]
pub fn SessionShell(children: Element) -> Element {
    let session = use_session();
    let route = use_route();

    use_effect(move || {
        if !session.read().is_signed_in() && !route.peek().is_public() {
            navigate(route, Route::Login);
        }
    });

    if !session.read().is_signed_in() {
        return rsx! {};
    }

    rsx! {
        div { class: "tb-shell",
            Navbar {}
            main { class: "tb-main", {children} }
        }
    }
}
