use dioxus::prelude::*;
use topicboard_core::session::SessionAction;

use crate::components::{dispatch, use_session, use_strings};

/// Free-text topic filter. Every keystroke updates the session.
#[component]
pub fn SearchBar() -> Element {
    let session = use_session();
    let placeholder = use_strings().navbar.search_placeholder;
    let search_text = session.read().search_text.clone();

    rsx! {
        div { class: "tb-search",
            span { class: "tb-search-icon", "\u{1F50D}" }
            input {
                class: "tb-search-input",
                r#type: "search",
                placeholder,
                value: "{search_text}",
                oninput: move |evt| dispatch(session, SessionAction::SetSearchText(evt.value())),
            }
        }
    }
}
