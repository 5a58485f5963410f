//! Topic operations for the signed-in user.

use tracing::{info, warn};

use crate::error::TopicError;
use crate::routes::report_url;
use crate::storage::{StoreError, Subscription, TopicStore};
use crate::types::{current_timestamp_millis, Topic, TopicId, TopicRecord, UserId};

use super::TopicListModel;

/// Operations on one user's topics, bound to a store and the app origin.
pub struct TopicService<S> {
    store: S,
    user_id: UserId,
    origin: String,
}

impl<S: TopicStore> TopicService<S> {
    /// `origin` is the app's base URL, used to build report links.
    pub fn new(store: S, user_id: UserId, origin: impl Into<String>) -> Self {
        Self {
            store,
            user_id,
            origin: origin.into(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Live snapshots of this user's topics. Drop to unsubscribe.
    pub fn subscribe(&self) -> Subscription {
        self.store.subscribe(&self.user_id)
    }

    /// Creates a topic named `name`.
    ///
    /// `existing` is the list currently shown to the user; names must be
    /// unique within it (exact match).
    pub async fn create_topic(
        &self,
        existing: &TopicListModel,
        name: &str,
    ) -> Result<Topic, TopicError> {
        self.create_topic_at(existing, name, current_timestamp_millis())
            .await
    }

    /// [`Self::create_topic`] with an explicit creation time.
    pub async fn create_topic_at(
        &self,
        existing: &TopicListModel,
        name: &str,
        date: i64,
    ) -> Result<Topic, TopicError> {
        if name.trim().is_empty() {
            return Err(TopicError::Validation);
        }
        if existing.contains_name(name) {
            return Err(TopicError::DuplicateName(name.to_string()));
        }

        let topic_id = self.store.generate_id();
        let record = TopicRecord {
            date,
            topic_name: name.to_string(),
            report_url: report_url(&self.origin, &self.user_id, &topic_id),
            is_archived: None,
        };

        self.store
            .put_topic(&self.user_id, &topic_id, &record)
            .await
            .map_err(|e| {
                warn!("Failed to create topic {}: {}", topic_id, e);
                TopicError::StoreWrite(e.to_string())
            })?;

        info!("Created topic {}", topic_id);
        Ok(Topic::new(topic_id, record))
    }

    /// Moves a topic to the archived partition.
    pub async fn archive(&self, topic_id: &TopicId) -> Result<(), TopicError> {
        self.set_archived(topic_id, true).await
    }

    /// Moves a topic back to the active partition.
    pub async fn activate(&self, topic_id: &TopicId) -> Result<(), TopicError> {
        self.set_archived(topic_id, false).await
    }

    async fn set_archived(&self, topic_id: &TopicId, archived: bool) -> Result<(), TopicError> {
        self.store
            .set_archived(&self.user_id, topic_id, archived)
            .await
            .map_err(|e| match e {
                StoreError::NotFound(path) => TopicError::NotFound(path),
                other => TopicError::StoreWrite(other.to_string()),
            })?;
        info!("Topic {} archived={}", topic_id, archived);
        Ok(())
    }

    /// Reads the stored report URL of a topic.
    ///
    /// Waits for the read to complete, so the caller never sees a link that
    /// hasn't arrived yet.
    pub async fn report_link(&self, topic_id: &TopicId) -> Result<String, TopicError> {
        let record = self
            .store
            .get_topic(&self.user_id, topic_id)
            .await?
            .ok_or_else(|| TopicError::NotFound(topic_id.to_string()))?;
        Ok(record.report_url)
    }
}
