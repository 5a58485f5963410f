//! In-memory topic store with live listeners.
//!
//! Behaves like the hosted tree for one process: children are returned in
//! key order, every write pushes a fresh snapshot to the subscribers of the
//! affected user, and a new subscriber receives the current snapshot first.

use futures_channel::mpsc::{unbounded, UnboundedSender};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};
use tracing::debug;

use super::{topic_path, SnapshotResult, StoreError, Subscription, TopicSnapshot, TopicStore};
use crate::push_id::PushIdGenerator;
use crate::types::{Topic, TopicId, TopicRecord, UserId, ARCHIVED_SENTINEL};

struct Listener {
    user_id: UserId,
    sender: UnboundedSender<SnapshotResult>,
}

#[derive(Default)]
struct Inner {
    tree: RwLock<BTreeMap<UserId, BTreeMap<TopicId, TopicRecord>>>,
    listeners: RwLock<HashMap<u64, Listener>>,
    next_listener_id: AtomicU64,
    read_only: AtomicBool,
}

fn poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Database(format!("Lock poisoned: {}", e))
}

impl Inner {
    fn snapshot(&self, user_id: &UserId) -> Result<TopicSnapshot, StoreError> {
        let tree = self.tree.read().map_err(poisoned)?;
        Ok(tree
            .get(user_id)
            .map(|topics| {
                topics
                    .iter()
                    .map(|(id, record)| Topic::new(id.clone(), record.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn notify(&self, user_id: &UserId) -> Result<(), StoreError> {
        let snapshot = self.snapshot(user_id)?;
        let listeners = self.listeners.read().map_err(poisoned)?;
        for listener in listeners.values().filter(|l| &l.user_id == user_id) {
            // A closed receiver is cleaned up when its Subscription drops
            let _ = listener.sender.unbounded_send(Ok(snapshot.clone()));
        }
        Ok(())
    }

    fn check_writable(&self, path: &str) -> Result<(), StoreError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::PermissionDenied(path.to_string()));
        }
        Ok(())
    }
}

/// Process-local [`TopicStore`].
#[derive(Default)]
pub struct InMemoryTopicStore {
    inner: Arc<Inner>,
    ids: PushIdGenerator,
}

impl InMemoryTopicStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects all writes with `PermissionDenied` while set.
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .read()
            .map(|listeners| listeners.len())
            .unwrap_or(0)
    }
}

#[async_trait::async_trait(?Send)]
impl TopicStore for InMemoryTopicStore {
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
        self.inner.check_writable(&path)?;
        {
            let mut tree = self.inner.tree.write().map_err(poisoned)?;
            tree.entry(user_id.clone())
                .or_default()
                .insert(topic_id.clone(), record.clone());
        }
        debug!("put {}", path);
        self.inner.notify(user_id)
    }

    async fn set_archived(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
        archived: bool,
    ) -> Result<(), StoreError> {
        let path = topic_path(user_id, topic_id);
        self.inner.check_writable(&path)?;
        {
            let mut tree = self.inner.tree.write().map_err(poisoned)?;
            let record = tree
                .get_mut(user_id)
                .and_then(|topics| topics.get_mut(topic_id))
                .ok_or_else(|| StoreError::NotFound(path.clone()))?;
            record.is_archived = archived.then(|| ARCHIVED_SENTINEL.to_string());
        }
        debug!("update {} isArchived={}", path, archived);
        self.inner.notify(user_id)
    }

    async fn get_topic(
        &self,
        user_id: &UserId,
        topic_id: &TopicId,
    ) -> Result<Option<TopicRecord>, StoreError> {
        let tree = self.inner.tree.read().map_err(poisoned)?;
        Ok(tree
            .get(user_id)
            .and_then(|topics| topics.get(topic_id))
            .cloned())
    }

    async fn list_topics(&self, user_id: &UserId) -> Result<TopicSnapshot, StoreError> {
        self.inner.snapshot(user_id)
    }

    fn subscribe(&self, user_id: &UserId) -> Subscription {
        let (sender, receiver) = unbounded();
        let listener_id = self.inner.next_listener_id.fetch_add(1, Ordering::SeqCst);

        // Deliver the current value first, like the hosted tree does
        let initial = self.inner.snapshot(user_id);
        if let Err(e) = &initial {
            debug!("initial snapshot unavailable: {}", e);
        }
        let _ = sender.unbounded_send(initial);

        if let Ok(mut listeners) = self.inner.listeners.write() {
            listeners.insert(
                listener_id,
                Listener {
                    user_id: user_id.clone(),
                    sender,
                },
            );
        }

        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        Subscription::new(receiver).on_release(move || {
            if let Some(inner) = inner.upgrade() {
                if let Ok(mut listeners) = inner.listeners.write() {
                    listeners.remove(&listener_id);
                }
            }
        })
    }
}
