use dioxus::prelude::*;
use topicboard_core::routes::Route;

use super::{SearchBar, UserMenu};
use crate::components::{navigate, use_route, use_strings};

/// Top bar with the topic list link, search input and user menu.
#[component]
pub fn Navbar() -> Element {
    let route = use_route();
    let strings = &use_strings().navbar;

    let link_class = if route() == Route::TopicList {
        "tb-nav-link tb-nav-link--active"
    } else {
        "tb-nav-link"
    };

    rsx! {
        header { class: "tb-navbar",
            div { class: "tb-navbar-left",
                span { class: "tb-brand", "Topicboard" }
                a {
                    class: link_class,
                    href: "#/",
                    onclick: move |evt| {
                        evt.prevent_default();
                        navigate(route, Route::TopicList);
                    },
                    "{strings.my_topics_menu}"
                }
            }
            div { class: "tb-navbar-center",
                SearchBar {}
            }
            div { class: "tb-navbar-right",
                UserMenu {}
            }
        }
    }
}
