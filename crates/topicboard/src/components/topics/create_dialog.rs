//! Modal dialog for naming a new topic.

use dioxus::prelude::*;
use topicboard_core::config::MODAL_CLOSE_TIMEOUT_MS;

use crate::components::use_strings;
use crate::platform::sleep_ms;

/// Creation dialog.
///
/// `on_create` receives the raw input; validation happens in the topic
/// service so the dialog stays open on errors. Closing plays the exit
/// animation before `on_close` fires.
#[component]
pub fn CreateTopicDialog(
    on_create: EventHandler<String>,
    on_close: EventHandler<()>,
    creating: ReadSignal<bool>,
) -> Element {
    let strings = &use_strings().user_topics.modal;
    let mut name = use_signal(String::new);
    let mut closing = use_signal(|| false);

    let mut close = move || {
        if closing() {
            return;
        }
        closing.set(true);
        spawn(async move {
            sleep_ms(MODAL_CLOSE_TIMEOUT_MS).await;
            on_close.call(());
        });
    };

    let submit = move || {
        if !creating() {
            on_create.call(name.read().clone());
        }
    };

    let modal_class = if closing() {
        "tb-modal tb-modal--closing"
    } else {
        "tb-modal"
    };

    rsx! {
        // Modal backdrop
        div {
            class: "tb-modal-backdrop",
            onclick: move |_| close(),

            // Clicks inside the dialog must not reach the backdrop
            div {
                class: modal_class,
                role: "dialog",
                onclick: move |e| e.stop_propagation(),

                div { class: "tb-modal-header",
                    h2 { class: "tb-modal-title", "{strings.title}" }
                    button {
                        class: "tb-modal-close",
                        "aria-label": strings.close_label,
                        onclick: move |_| close(),
                        "\u{2715}"
                    }
                }

                div { class: "tb-modal-content",
                    input {
                        class: "tb-input",
                        r#type: "text",
                        autofocus: true,
                        placeholder: strings.input_placeholder,
                        value: "{name}",
                        disabled: creating(),
                        oninput: move |evt| name.set(evt.value()),
                        onkeypress: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                submit();
                            }
                        },
                    }
                }

                div { class: "tb-modal-actions",
                    button {
                        class: "tb-btn tb-btn--primary",
                        disabled: creating(),
                        onclick: move |_| submit(),
                        "{strings.create_button}"
                    }
                }
            }
        }
    }
}
