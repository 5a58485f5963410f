//! Realtime document-tree store abstraction.
//!
//! Topics live at `topics/{userId}/{topicId}` in a path-addressed store that
//! pushes snapshots to subscribers. [`TopicStore`] is the contract the rest
//! of the workspace programs against.
//!
//! # Implementations
//!
//! - [`InMemoryTopicStore`] - process-local tree with live listeners (tests, offline demo)
//! - `RealtimeDbStore` - hosted realtime database over REST (in app crate)
//!
//! # Subscriptions
//!
//! [`TopicStore::subscribe`] hands back a [`Subscription`], a stream of
//! snapshots (or read failures) that owns its listener registration. Dropping the subscription
//! unregisters the listener, so a view that owns its subscription cannot leak
//! update callbacks after it is torn down.

mod memory;

pub use memory::InMemoryTopicStore;

use futures::stream::{LocalBoxStream, Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use thiserror::Error;

use crate::types::{Topic, TopicId, TopicRecord, UserId};

/// All topics of one user, in store key order.
pub type TopicSnapshot = Vec<Topic>;

/// One item of a [`Subscription`]: a fresh snapshot, or a failed read.
pub type SnapshotResult = Result<TopicSnapshot, StoreError>;

/// Errors reported by a topic store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Path does not exist
    #[error("Not found: {0}")]
    NotFound(String),
    /// Store rules rejected the request
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    /// Transport failure
    #[error("Network error: {0}")]
    Network(String),
    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Backend-specific failure
    #[error("Database error: {0}")]
    Database(String),
}

/// Path of a user's topic subtree.
pub fn user_topics_path(user_id: &UserId) -> String {
    format!("{}/{}", crate::config::TOPICS_ROOT, user_id)
}

/// Path of a single topic record.
pub fn topic_path(user_id: &UserId, topic_id: &TopicId) -> String {
    format!("{}/{}", user_topics_path(user_id), topic_id)
}

/// Store holding every user's topics.
#[async_trait::async_trait(?Send)]
pub trait TopicStore {
    /// Generates a fresh, unused topic id.
    fn generate_id(&self) -> TopicId;

    /// Writes a full topic record, replacing anything at that path.
    #[must_use = "Store write failures should be handled"]
    async fn put_topic(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
        record: &TopicRecord,
    ) -> Result<(), StoreError>;

    /// Sets or clears the archived flag of an existing topic.
    #[must_use = "Store write failures should be handled"]
    async fn set_archived(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
        archived: bool,
    ) -> Result<(), StoreError>;

    /// One-shot read of a single topic. `Ok(None)` if it doesn't exist.
    async fn get_topic(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<TopicRecord>, StoreError>;

    /// One-shot read of a user's topics in key order.
    async fn list_topics(&self, user_id: &UserId) -> Result<TopicSnapshot, StoreError>;

    /// Subscribes to a user's topic subtree.
    ///
    /// The current snapshot is delivered first, then one snapshot per change.
    /// A read that fails is delivered as an `Err`; the subscription stays open.
    fn subscribe(&self, user_id: &UserId) -> Subscription;
}

// Lets a store be shared between the UI context and tests.
#[async_trait::async_trait(?Send)]
impl<T: TopicStore + ?Sized> TopicStore for Arc<T> {
    fn generate_id(&self) -> TopicId {
        (**self).generate_id()
    }

    async fn put_topic(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
        record: &TopicRecord,
    ) -> Result<(), StoreError> {
        (**self).put_topic(user_id, topic_id, record).await
    }

    async fn set_archived(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
        archived: bool,
    ) -> Result<(), StoreError> {
        (**self).set_archived(user_id, topic_id, archived).await
    }

    async fn get_topic(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<TopicRecord>, StoreError> {
        (**self).get_topic(user_id, topic_id).await
    }

    async fn list_topics(&self, user_id: &UserId) -> Result<TopicSnapshot, StoreError> {
        (**self).list_topics(user_id).await
    }

    fn subscribe(&self, user_id: &UserId) -> Subscription {
        (**self).subscribe(user_id)
    }
}

/// Live stream of snapshots that unregisters itself on drop.
pub struct Subscription {
    snapshots: LocalBoxStream<'static, SnapshotResult>,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(snapshots: impl Stream<Item = SnapshotResult> + 'static) -> Self {
        Self {
            snapshots: snapshots.boxed_local(),
            release: None,
        }
    }

    /// Attaches the hook that unregisters the listener.
    pub fn on_release(mut self, release: impl FnOnce() + 'static) -> Self {
        self.release = Some(Box::new(release));
        self
    }
}

impl Stream for Subscription {
    type Item = SnapshotResult;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.snapshots.poll_next_unpin(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_paths() {
        let user = UserId::new("u1");
        let topic = TopicId::new("t1");
        assert_eq!(user_topics_path(&user), "topics/u1");
        assert_eq!(topic_path(&user, &topic), "topics/u1/t1");
    }

    #[tokio::test]
    async fn test_subscription_releases_on_drop() {
        let released = Rc::new(Cell::new(false));
        let flag = released.clone();

        let mut sub = Subscription::new(futures::stream::iter(vec![Ok(Vec::new())]))
            .on_release(move || flag.set(true));

        assert_eq!(sub.next().await, Some(Ok(Vec::new())));
        assert!(!released.get());
        drop(sub);
        assert!(released.get());
    }
}
