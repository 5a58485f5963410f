//! Single-topic pages: the owner's topic view and the public report view.
//!
//! Both resolve the topic with a one-shot store read. The route renders
//! them keyed by `{user}/{topic}`, so a new id remounts the component and
//! starts a fresh read.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use topicboard_core::routes::Route;
use topicboard_core::{Topic, TopicId, TopicRecord, UserId};

use crate::components::{navigate, use_route, use_store, use_strings};
use crate::storage::{StoreError, TopicStore};
use crate::utils::format_date;

fn use_topic(
    user_id: UserId,
    topic_id: TopicId,
) -> Resource<Result<Option<TopicRecord>, StoreError>> {
    let store = use_store();
    use_resource(move || {
        let user_id = user_id.clone();
        let topic_id = topic_id.clone();
        async move { store().get_topic(&user_id, &topic_id).await }
    })
}

/// Owner's view of a topic, opened from its card.
#[component]
pub fn TopicView(user_id: UserId, topic_id: TopicId, page: u32) -> Element {
    let strings = &use_strings().detail;
    let route = use_route();

    debug!("Showing topic {} page {}", topic_id, page);

    rsx! {
        section { class: "tb-detail",
            a {
                class: "tb-back-link",
                href: "#/",
                onclick: move |evt| {
                    evt.prevent_default();
                    navigate(route, Route::TopicList);
                },
                "\u{2190} {strings.back}"
            }
            TopicLookup { user_id, topic_id }
        }
    }
}

/// Public report page reached through a shared report link.
#[component]
pub fn ReportView(user_id: UserId, topic_id: TopicId) -> Element {
    let strings = &use_strings().detail;

    rsx! {
        section { class: "tb-detail tb-detail--report",
            h1 { class: "tb-detail-kicker", "{strings.report_title}" }
            TopicLookup { user_id, topic_id }
        }
    }
}

#[component]
fn TopicLookup(user_id: UserId, topic_id: TopicId) -> Element {
    let strings = &use_strings().detail;
    let loading = use_strings().user_topics.loading;
    let record = use_topic(user_id, topic_id.clone());
    let state = record.read().clone();

    match state {
        None => rsx! {
            div { class: "tb-loader",
                div { class: "tb-spinner" }
                span { "{loading}" }
            }
        },
        Some(Ok(Some(record))) => rsx! {
            TopicSummary { topic: Topic::new(topic_id, record) }
        },
        Some(Ok(None)) => rsx! {
            div { class: "tb-card tb-card--empty", "{strings.not_found}" }
        },
        Some(Err(e)) => rsx! {
            div { class: "tb-card tb-card--error", "{e}" }
        },
    }
}

#[component]
fn TopicSummary(topic: Topic) -> Element {
    let strings = &use_strings().detail;
    let created = format_date(topic.record.date);
    let (status, status_class) = if topic.is_archived() {
        (strings.status_archived, "tb-badge tb-badge--archived")
    } else {
        (strings.status_active, "tb-badge tb-badge--active")
    };
    let name = topic.name().to_string();
    let report_url = topic.report_url().to_string();

    rsx! {
        article { class: "tb-card tb-detail-card",
            header { class: "tb-detail-header",
                h2 { class: "tb-detail-title", "{name}" }
                span { class: status_class, "{status}" }
            }
            dl { class: "tb-detail-meta",
                dt { "{strings.created}" }
                dd { "{created}" }
                dt { "{strings.report_link}" }
                dd {
                    a { href: "{report_url}", target: "_blank", rel: "noopener", "{report_url}" }
                }
            }
        }
    }
}
