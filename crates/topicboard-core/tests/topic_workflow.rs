//! End-to-end tests of the topic list view-model against the in-memory store.
//!
//! These tests drive the same sequence the UI does: subscribe, feed every
//! snapshot into a `TopicListModel`, run operations through `TopicService`,
//! and read the visible list through the session's search/toggle state.

use futures::StreamExt;
use std::sync::Arc;
use topicboard_core::routes::Route;
use topicboard_core::session::{reduce, SessionAction, SessionState};
use topicboard_core::storage::{InMemoryTopicStore, Subscription, TopicStore};
use topicboard_core::topics::{LoadState, TopicListModel, TopicService};
use topicboard_core::{TopicError, UserId};

const ORIGIN: &str = "http://localhost:8080";

struct Harness {
    store: Arc<InMemoryTopicStore>,
    service: TopicService<Arc<InMemoryTopicStore>>,
    subscription: Subscription,
    model: TopicListModel,
}

impl Harness {
    fn new(user: &str) -> Self {
        let store = Arc::new(InMemoryTopicStore::new());
        let service = TopicService::new(store.clone(), UserId::new(user), ORIGIN);
        let subscription = service.subscribe();
        Self {
            store,
            service,
            subscription,
            model: TopicListModel::new(),
        }
    }

    /// Applies the next pending snapshot.
    async fn sync(&mut self) {
        let snapshot = self
            .subscription
            .next()
            .await
            .expect("subscription ended unexpectedly")
            .expect("snapshot read failed");
        self.model.apply_snapshot(snapshot);
    }

    async fn create(&mut self, name: &str) -> Result<(), TopicError> {
        self.service
            .create_topic(&self.model, name)
            .await
            .map(|_| ())
    }

    fn visible_names(&self, session: &SessionState) -> Vec<String> {
        self.model
            .visible(&session.search_text, session.show_archived)
            .iter()
            .map(|t| t.name().to_string())
            .collect()
    }
}

#[tokio::test]
async fn test_initial_load_transitions_to_loaded() {
    let mut h = Harness::new("u1");
    assert_eq!(h.model.state(), LoadState::Loading);
    h.sync().await;
    assert_eq!(h.model.state(), LoadState::Loaded);
    assert!(h.model.topics().is_empty());
}

#[tokio::test]
async fn test_create_grows_set_with_unique_ids_and_report_urls() {
    let mut h = Harness::new("u1");
    h.sync().await;

    for (i, name) in ["Q1", "Q2", "Q3"].iter().enumerate() {
        h.create(name).await.unwrap();
        h.sync().await;
        assert_eq!(h.model.topics().len(), i + 1);
    }

    let topics = h.model.topics();
    let mut ids: Vec<_> = topics.iter().map(|t| t.id.clone()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    for topic in topics {
        let url = topic.report_url();
        assert!(url.contains("u1"));
        assert!(url.contains(topic.id.as_str()));
        // The link routes back to the same topic
        let (_, fragment) = url.split_once('#').expect("report link has a fragment");
        assert_eq!(
            Route::parse(fragment),
            Route::Report {
                user_id: UserId::new("u1"),
                topic_id: topic.id.clone()
            }
        );
    }

    // Store order follows creation order
    let names: Vec<_> = topics.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Q1", "Q2", "Q3"]);
}

#[tokio::test]
async fn test_duplicate_and_empty_names_leave_set_unchanged() {
    let mut h = Harness::new("u1");
    h.sync().await;
    h.create("Q1").await.unwrap();
    h.sync().await;
    let before = h.model.topics().to_vec();

    assert_eq!(
        h.create("Q1").await.unwrap_err(),
        TopicError::DuplicateName("Q1".into())
    );
    assert_eq!(h.create("").await.unwrap_err(), TopicError::Validation);

    let stored = h.store.list_topics(&UserId::new("u1")).await.unwrap();
    assert_eq!(stored, before);
}

#[tokio::test]
async fn test_archive_moves_topic_out_of_active_view() {
    let mut h = Harness::new("u1");
    h.sync().await;
    h.create("Q1").await.unwrap();
    h.sync().await;
    h.create("Q2").await.unwrap();
    h.sync().await;

    let q2 = h.model.topics()[1].id.clone();
    h.service.archive(&q2).await.unwrap();
    h.sync().await;

    let session = SessionState::default();
    assert_eq!(h.visible_names(&session), vec!["Q1"]);

    let session = reduce(&session, SessionAction::ToggleShowArchived);
    assert_eq!(h.visible_names(&session), vec!["Q1", "Q2"]);

    // Toggling back hides the archived topic again
    let session = reduce(&session, SessionAction::ToggleShowArchived);
    assert_eq!(h.visible_names(&session), vec!["Q1"]);

    h.service.activate(&q2).await.unwrap();
    h.sync().await;
    assert_eq!(h.visible_names(&session), vec!["Q1", "Q2"]);
}

#[tokio::test]
async fn test_search_text_from_session_filters_list() {
    let mut h = Harness::new("u1");
    h.sync().await;
    for name in ["Budget 2024", "Retro", "budget review"] {
        h.create(name).await.unwrap();
        h.sync().await;
    }

    let session = reduce(
        &SessionState::default(),
        SessionAction::SetSearchText("BUDGET".into()),
    );
    assert_eq!(
        h.visible_names(&session),
        vec!["Budget 2024", "budget review"]
    );
}

#[tokio::test]
async fn test_dropping_subscription_releases_listener() {
    let h = Harness::new("u1");
    assert_eq!(h.store.listener_count(), 1);
    let store = h.store.clone();
    drop(h);
    assert_eq!(store.listener_count(), 0);
}
