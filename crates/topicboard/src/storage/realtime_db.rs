//! Hosted realtime database backend (REST).
//!
//! Every tree path maps to `{base_url}/{path}.json`:
//!
//! | Operation      | Request                                   |
//! |----------------|-------------------------------------------|
//! | `list_topics`  | `GET topics/{uid}.json`                   |
//! | `get_topic`    | `GET topics/{uid}/{tid}.json`             |
//! | `put_topic`    | `PUT topics/{uid}/{tid}.json`             |
//! | `set_archived` | `PATCH topics/{uid}/{tid}.json`           |
//!
//! The signed-in user's OAuth token is sent as the `access_token` query
//! parameter. Live updates are emulated by re-reading the subscribed subtree
//! every [`SUBSCRIPTION_POLL_INTERVAL_MS`], and immediately after a local
//! write. Only snapshots that differ from the previous one are emitted, and
//! only the first failure of a run of failed reads is reported.
//!
//! Transport errors are formatted without their URL, which carries the token.

use dioxus::logger::tracing::{debug, warn};
use futures::future::{select, Either};
use futures::StreamExt;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};
use topicboard_core::config::SUBSCRIPTION_POLL_INTERVAL_MS;
use topicboard_core::push_id::PushIdGenerator;
use topicboard_core::storage::{topic_path, user_topics_path};
use topicboard_core::types::ARCHIVED_SENTINEL;
use topicboard_core::{Topic, TopicId, TopicRecord, UserId};

use super::{StoreError, Subscription, TopicSnapshot, TopicStore};
use crate::http;
use crate::platform::sleep_ms;

struct Inner {
    base_url: String,
    access_token: Option<String>,
    /// Wakes the poll loop of each live subscription, keyed by listener id
    nudges: RwLock<HashMap<u64, (UserId, UnboundedSender<()>)>>,
    next_listener_id: AtomicU64,
}

/// [`TopicStore`] backed by the hosted realtime database.
pub struct RealtimeDbStore {
    inner: Arc<Inner>,
    ids: PushIdGenerator,
}

impl RealtimeDbStore {
    /// `base_url` is the database root, e.g. `https://project.firebaseio.com`.
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                base_url: base_url.into().trim_end_matches('/').to_string(),
                access_token,
                nudges: RwLock::new(HashMap::new()),
                next_listener_id: AtomicU64::new(0),
            }),
            ids: PushIdGenerator::new(),
        }
    }
}

impl Inner {
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let request = http::client().request(method, self.endpoint(path));
        match &self.access_token {
            Some(token) => request.query(&[("access_token", token)]),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let response = self
            .request(reqwest::Method::GET, path)
            .send()
            .await
            .map_err(network_error)?;
        check_status(response, path)?
            .json::<T>()
            .await
            .map_err(|e| StoreError::Serialization(format!("{}: {}", path, e.without_url())))
    }

    async fn fetch_snapshot(&self, user_id: &UserId) -> Result<TopicSnapshot, StoreError> {
        let children: Option<BTreeMap<String, TopicRecord>> =
            self.get_json(&user_topics_path(user_id)).await?;
        Ok(into_snapshot(children))
    }

    /// Triggers an immediate re-read in every subscription of `user_id`.
    fn nudge(&self, user_id: &UserId) {
        if let Ok(nudges) = self.nudges.read() {
            for (_, sender) in nudges.values().filter(|(owner, _)| owner == user_id) {
                let _ = sender.unbounded_send(());
            }
        }
    }
}

/// Transport failure, minus the request URL and its `access_token` query.
fn network_error(e: reqwest::Error) -> StoreError {
    StoreError::Network(e.without_url().to_string())
}

fn check_status(response: Response, path: &str) -> Result<Response, StoreError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(StoreError::PermissionDenied(path.to_string()))
        }
        StatusCode::NOT_FOUND => Err(StoreError::NotFound(path.to_string())),
        status => Err(StoreError::Network(format!("{} returned {}", path, status))),
    }
}

/// Children of a user's subtree in key order. `null` is an empty subtree.
fn into_snapshot(children: Option<BTreeMap<String, TopicRecord>>) -> TopicSnapshot {
    children
        .unwrap_or_default()
        .into_iter()
        .map(|(id, record)| Topic::new(TopicId::new(id), record))
        .collect()
}

/// Body of the archive/activate PATCH. `null` deletes the field.
fn archived_patch(archived: bool) -> serde_json::Value {
    if archived {
        serde_json::json!({ "isArchived": ARCHIVED_SENTINEL })
    } else {
        serde_json::json!({ "isArchived": null })
    }
}

struct PollState {
    inner: Arc<Inner>,
    user_id: UserId,
    nudges: UnboundedReceiver<()>,
    last: Option<TopicSnapshot>,
    first: bool,
    failing: bool,
}

impl PollState {
    /// Waits for the next poll tick or a local-write nudge.
    async fn wait(&mut self) {
        let tick = Box::pin(sleep_ms(SUBSCRIPTION_POLL_INTERVAL_MS));
        if let Either::Right((None, tick)) = select(tick, self.nudges.next()).await {
            tick.await;
        }
    }

    /// Decides what a read means for the subscriber: a changed snapshot, the
    /// first error after a good read, or nothing.
    fn settle(
        &mut self,
        result: Result<TopicSnapshot, StoreError>,
    ) -> Option<Result<TopicSnapshot, StoreError>> {
        match result {
            Ok(snapshot) => {
                self.failing = false;
                if self.last.as_ref() == Some(&snapshot) {
                    return None;
                }
                self.last = Some(snapshot.clone());
                Some(Ok(snapshot))
            }
            Err(e) if self.failing => {
                debug!("Refreshing topics of {} still failing: {}", self.user_id, e);
                None
            }
            Err(e) => {
                warn!("Refreshing topics of {} failed: {}", self.user_id, e);
                self.failing = true;
                Some(Err(e))
            }
        }
    }

    async fn next_change(mut self) -> Option<(Result<TopicSnapshot, StoreError>, Self)> {
        loop {
            if !self.first {
                self.wait().await;
            }
            self.first = false;

            let result = self.inner.fetch_snapshot(&self.user_id).await;
            if let Some(event) = self.settle(result) {
                return Some((event, self));
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl TopicStore for RealtimeDbStore {
    fn generate_id(&self) -> TopicId {
        self.ids.generate()
    }

    async fn put_topic(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
        record: &TopicRecord,
    ) -> Result<(), StoreError> {
        let path = topic_path(user_id, topic_id);
        let response = self
            .inner
            .request(reqwest::Method::PUT, &path)
            .json(record)
            .send()
            .await
            .map_err(network_error)?;
        check_status(response, &path)?;
        debug!("put {}", path);
        self.inner.nudge(user_id);
        Ok(())
    }

    async fn set_archived(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
        archived: bool,
    ) -> Result<(), StoreError> {
        let path = topic_path(user_id, topic_id);

        // PATCH on a missing path would create a record with only isArchived
        if self.get_topic(user_id, topic_id).await?.is_none() {
            return Err(StoreError::NotFound(path));
        }

        let response = self
            .inner
            .request(reqwest::Method::PATCH, &path)
            .json(&archived_patch(archived))
            .send()
            .await
            .map_err(network_error)?;
        check_status(response, &path)?;
        debug!("update {} isArchived={}", path, archived);
        self.inner.nudge(user_id);
        Ok(())
    }

    async fn get_topic(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<TopicRecord>, StoreError> {
        self.inner.get_json(&topic_path(user_id, topic_id)).await
    }

    async fn list_topics(&self, user_id: &UserId) -> Result<TopicSnapshot, StoreError> {
        self.inner.fetch_snapshot(user_id).await
    }

    fn subscribe(&self, user_id: &UserId) -> Subscription {
        let (sender, receiver) = unbounded();
        let listener_id = self.inner.next_listener_id.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut nudges) = self.inner.nudges.write() {
            nudges.insert(listener_id, (user_id.clone(), sender));
        }

        let state = PollState {
            inner: self.inner.clone(),
            user_id: user_id.clone(),
            nudges: receiver,
            last: None,
            first: true,
            failing: false,
        };
        let snapshots = futures::stream::unfold(state, PollState::next_change);

        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        Subscription::new(snapshots).on_release(move || {
            if let Some(inner) = inner.upgrade() {
                if let Ok(mut nudges) = inner.nudges.write() {
                    nudges.remove(&listener_id);
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topicboard_core::topics::{TopicListModel, TopicService};
    use topicboard_core::TopicError;

    /// Nothing listens on port 1, so every request fails to connect.
    const UNREACHABLE: &str = "http://127.0.0.1:1";
    const TOKEN: &str = "ya29.secret-token";

    fn poll_state() -> PollState {
        let (_sender, receiver) = unbounded();
        PollState {
            inner: Arc::new(Inner {
                base_url: UNREACHABLE.to_string(),
                access_token: None,
                nudges: RwLock::new(HashMap::new()),
                next_listener_id: AtomicU64::new(0),
            }),
            user_id: UserId::new("u1"),
            nudges: receiver,
            last: None,
            first: true,
            failing: false,
        }
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let store = RealtimeDbStore::new("https://db.example.com/", None);
        assert_eq!(
            store.inner.endpoint("topics/u1/t1"),
            "https://db.example.com/topics/u1/t1.json"
        );
    }

    #[test]
    fn test_snapshot_from_wire_in_key_order() {
        let children: Option<BTreeMap<String, TopicRecord>> = serde_json::from_str(
            r#"{
                "-Nb": {"date": 2, "topicName": "Second", "reportUrl": "r2", "isArchived": "true"},
                "-Na": {"date": 1, "topicName": "First", "reportUrl": "r1"}
            }"#,
        )
        .unwrap();

        let snapshot = into_snapshot(children);
        let names: Vec<_> = snapshot.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert!(snapshot[1].is_archived());
    }

    #[test]
    fn test_empty_subtree_is_null() {
        let children: Option<BTreeMap<String, TopicRecord>> =
            serde_json::from_str("null").unwrap();
        assert!(into_snapshot(children).is_empty());
    }

    #[test]
    fn test_archived_patch_body() {
        assert_eq!(archived_patch(true).to_string(), r#"{"isArchived":"true"}"#);
        assert_eq!(archived_patch(false).to_string(), r#"{"isArchived":null}"#);
    }

    #[test]
    fn test_dropping_subscription_unregisters_nudge() {
        let store = RealtimeDbStore::new("https://db.example.com", Some("tok".into()));
        let user = UserId::new("u1");

        let subscription = store.subscribe(&user);
        assert_eq!(store.inner.nudges.read().unwrap().len(), 1);
        drop(subscription);
        assert!(store.inner.nudges.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_network_errors_do_not_leak_token() {
        let store = Arc::new(RealtimeDbStore::new(UNREACHABLE, Some(TOKEN.to_string())));

        let err = store.list_topics(&UserId::new("u1")).await.unwrap_err();
        assert!(matches!(err, StoreError::Network(_)));
        assert!(!err.to_string().contains(TOKEN));

        let service = TopicService::new(store, UserId::new("u1"), "http://localhost:8080");
        let err = service
            .create_topic(&TopicListModel::new(), "Q1")
            .await
            .unwrap_err();
        match err {
            TopicError::StoreWrite(message) => {
                assert!(!message.contains(TOKEN));
                assert!(!message.contains("access_token"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_subscription_reports_first_read_failure() {
        let store = RealtimeDbStore::new(UNREACHABLE, Some(TOKEN.to_string()));
        let mut subscription = store.subscribe(&UserId::new("u1"));

        let err = subscription.next().await.unwrap().unwrap_err();
        assert!(matches!(err, StoreError::Network(_)));
        assert!(!err.to_string().contains(TOKEN));
    }

    #[test]
    fn test_settle_reports_one_error_per_failing_run() {
        let mut state = poll_state();
        let denied = || Err(StoreError::PermissionDenied("topics/u1".into()));

        assert!(matches!(state.settle(denied()), Some(Err(_))));
        assert!(state.settle(denied()).is_none());

        // A good read ends the run; the next failure is reported again
        assert_eq!(state.settle(Ok(Vec::new())), Some(Ok(Vec::new())));
        assert!(matches!(state.settle(denied()), Some(Err(_))));
    }

    #[test]
    fn test_settle_skips_unchanged_snapshots() {
        let mut state = poll_state();
        assert_eq!(state.settle(Ok(Vec::new())), Some(Ok(Vec::new())));
        assert!(state.settle(Ok(Vec::new())).is_none());
    }
}
