use dioxus::prelude::*;
use topicboard_core::{Topic, TopicId};

use crate::components::use_strings;

/// Callbacks of a topic card, each receiving the card's topic id.
#[derive(Clone, Copy, PartialEq)]
pub struct TopicActions {
    pub on_open: EventHandler<TopicId>,
    pub on_archive: EventHandler<TopicId>,
    pub on_activate: EventHandler<TopicId>,
    pub on_copy_link: EventHandler<TopicId>,
}

/// What a card in the topic grid shows.
#[derive(Clone, PartialEq)]
pub enum CardKind {
    /// "Create topic" affordance
    Add { on_create: EventHandler<()> },
    /// An existing topic with its secondary menu
    Topic { topic: Topic, actions: TopicActions },
}

#[component]
pub fn TopicCard(kind: CardKind) -> Element {
    match kind {
        CardKind::Add { on_create } => rsx! {
            AddCard { on_create }
        },
        CardKind::Topic { topic, actions } => rsx! {
            ExistingTopicCard { topic, actions }
        },
    }
}

#[component]
fn AddCard(on_create: EventHandler<()>) -> Element {
    let label = use_strings().user_topics.create_topic_text;

    rsx! {
        button {
            class: "tb-topic-card tb-topic-card--add",
            onclick: move |_| on_create.call(()),
            span { class: "tb-topic-card-plus", "+" }
            span { class: "tb-topic-card-label", "{label}" }
        }
    }
}

#[component]
fn ExistingTopicCard(topic: Topic, actions: TopicActions) -> Element {
    let strings = &use_strings().user_topics;
    let mut menu_open = use_signal(|| false);

    let archived = topic.is_archived();
    let name = topic.name().to_string();
    let card_class = if archived {
        "tb-topic-card tb-topic-card--archived"
    } else {
        "tb-topic-card"
    };

    // Runs a menu action and closes the menu
    let menu_action = move |handler: EventHandler<TopicId>, id: TopicId| {
        move |evt: MouseEvent| {
            evt.stop_propagation();
            menu_open.set(false);
            handler.call(id.clone());
        }
    };

    let open_id = topic.id.clone();

    rsx! {
        article {
            class: card_class,
            onclick: move |_| actions.on_open.call(open_id.clone()),

            header { class: "tb-topic-card-header",
                h3 { class: "tb-topic-card-title", "{name}" }
                button {
                    class: "tb-icon-button",
                    "aria-haspopup": "true",
                    "aria-expanded": "{menu_open}",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        menu_open.set(!menu_open());
                    },
                    "\u{22EE}"
                }
            }

            if archived {
                span { class: "tb-badge tb-badge--archived", "{strings.archived}" }
            }

            if menu_open() {
                ul { class: "tb-menu", onclick: move |evt| evt.stop_propagation(),
                    if archived {
                        li {
                            button {
                                class: "tb-menu-item",
                                onclick: menu_action(actions.on_activate, topic.id.clone()),
                                "{strings.menu_to_active}"
                            }
                        }
                    } else {
                        li {
                            button {
                                class: "tb-menu-item",
                                onclick: menu_action(actions.on_archive, topic.id.clone()),
                                "{strings.menu_archive}"
                            }
                        }
                        li {
                            button {
                                class: "tb-menu-item",
                                onclick: menu_action(actions.on_copy_link, topic.id.clone()),
                                "{strings.menu_copy_link}"
                            }
                        }
                    }
                }
            }
        }
    }
}
