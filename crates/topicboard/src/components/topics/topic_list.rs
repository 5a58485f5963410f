use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;
use std::sync::Arc;
use topicboard_core::notification::Notification;
use topicboard_core::routes::Route;
use topicboard_core::session::SessionAction;
use topicboard_core::topics::{LoadState, TopicListModel, TopicService};
use topicboard_core::{Topic, TopicError, TopicId, UserId};

use super::{CardKind, CreateTopicDialog, TopicActions, TopicCard};
use crate::components::{
    dispatch, navigate, use_notifier, use_route, use_session, use_store, use_strings,
};
use crate::platform;
use crate::storage::TopicStore;

/// Operations issued from the topic grid, handled one at a time.
enum TopicCommand {
    Create(String),
    Archive(TopicId),
    Activate(TopicId),
    CopyLink(TopicId),
}

fn topic_service(
    store: Arc<dyn TopicStore>,
    user_id: UserId,
) -> TopicService<Arc<dyn TopicStore>> {
    TopicService::new(store, user_id, platform::origin())
}

/// The signed-in user's topics with search, archived toggle and actions.
#[component]
pub fn TopicList() -> Element {
    let session = use_session();
    let route = use_route();
    let store = use_store();
    let notifier = use_notifier();
    let all_strings = use_strings();
    let strings = &all_strings.user_topics;

    let mut model = use_signal(TopicListModel::new);
    let mut dialog_open = use_signal(|| false);
    let mut creating = use_signal(|| false);

    // Only the user id matters here; search edits must not resubscribe
    let user_id = use_memo(move || session.read().user.as_ref().map(|user| user.id.clone()));

    // Live snapshots. Restarting (new user or store) drops the old subscription.
    use_resource(move || async move {
        let store = store();
        let Some(user_id) = user_id() else {
            return;
        };
        model.set(TopicListModel::new());

        let mut snapshots = store.subscribe(&user_id);
        while let Some(next) = snapshots.next().await {
            match next {
                Ok(snapshot) => {
                    debug!("Received {} topics for {}", snapshot.len(), user_id);
                    model.write().apply_snapshot(snapshot);
                }
                Err(e) => {
                    model.write().apply_error();
                    notifier.show(Notification::from_error(&TopicError::Store(e), all_strings));
                }
            }
        }
    });

    let commands = use_coroutine(move |mut rx: UnboundedReceiver<TopicCommand>| async move {
        while let Some(command) = rx.next().await {
            let Some(owner) = user_id.peek().clone() else {
                continue;
            };
            let service = topic_service(store.peek().0.clone(), owner);

            match command {
                TopicCommand::Create(name) => {
                    creating.set(true);
                    // Snapshots keep arriving while the write is in flight
                    let existing = model.peek().clone();
                    match service.create_topic(&existing, &name).await {
                        Ok(_) => {
                            dialog_open.set(false);
                            notifier.success(strings.modal.on_success);
                        }
                        Err(e) => notifier.show(Notification::from_error(&e, all_strings)),
                    }
                    creating.set(false);
                }
                TopicCommand::Archive(id) => match service.archive(&id).await {
                    Ok(()) => notifier.success(strings.notification.on_archive),
                    Err(e) => notifier.show(Notification::from_error(&e, all_strings)),
                },
                TopicCommand::Activate(id) => match service.activate(&id).await {
                    Ok(()) => notifier.success(strings.notification.on_activate),
                    Err(e) => notifier.show(Notification::from_error(&e, all_strings)),
                },
                TopicCommand::CopyLink(id) => match service.report_link(&id).await {
                    Ok(link) => match platform::copy_to_clipboard(&link).await {
                        Ok(()) => notifier.info(strings.notification.on_copy_to_clipboard),
                        Err(e) => {
                            warn!("Copying report link failed: {}", e);
                            notifier.error(strings.notification.on_copy_failed);
                        }
                    },
                    Err(e) => notifier.show(Notification::from_error(&e, all_strings)),
                },
            }
        }
    });

    let actions = TopicActions {
        on_open: EventHandler::new(move |topic_id: TopicId| {
            if let Some(owner) = user_id.peek().clone() {
                navigate(route, Route::topic(owner, topic_id));
            }
        }),
        on_archive: EventHandler::new(move |id| commands.send(TopicCommand::Archive(id))),
        on_activate: EventHandler::new(move |id| commands.send(TopicCommand::Activate(id))),
        on_copy_link: EventHandler::new(move |id| commands.send(TopicCommand::CopyLink(id))),
    };

    let show_archived = session.read().show_archived;
    let visible: Vec<Topic> = {
        let state = session.read();
        model
            .read()
            .visible(&state.search_text, state.show_archived)
            .into_iter()
            .cloned()
            .collect()
    };
    let load_state = model.read().state();

    rsx! {
        section { class: "tb-topics",
            div { class: "tb-topics-toolbar",
                label { class: "tb-checkbox",
                    input {
                        r#type: "checkbox",
                        checked: show_archived,
                        onchange: move |_| dispatch(session, SessionAction::ToggleShowArchived),
                    }
                    span { "{strings.show_archived_topics}" }
                }
            }

            div { class: "tb-topic-grid",
                TopicCard {
                    kind: CardKind::Add {
                        on_create: EventHandler::new(move |_| dialog_open.set(true)),
                    }
                }
                if load_state == LoadState::Loading {
                    div { class: "tb-loader",
                        div { class: "tb-spinner" }
                        span { "{strings.loading}" }
                    }
                }
                for (key, topic) in visible.iter().map(|t| (t.id.to_string(), t.clone())) {
                    TopicCard {
                        key: "{key}",
                        kind: CardKind::Topic { topic, actions },
                    }
                }
            }
            if load_state == LoadState::Failed {
                p { class: "tb-load-error", "{strings.load_failed}" }
            }
            if load_state == LoadState::Loaded && visible.is_empty() {
                p { class: "tb-empty", "{strings.empty}" }
            }

            if dialog_open() {
                CreateTopicDialog {
                    creating,
                    on_create: move |name| commands.send(TopicCommand::Create(name)),
                    on_close: move |_| dialog_open.set(false),
                }
            }
        }
    }
}
