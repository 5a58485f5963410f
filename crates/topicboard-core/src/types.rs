use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns the current Unix timestamp in milliseconds.
///
/// Uses `instant::SystemTime` so it works on both WASM and native platforms.
/// If the system time is before UNIX_EPOCH, returns 0 instead of panicking.
pub fn current_timestamp_millis() -> i64 {
    instant::SystemTime::now()
        .duration_since(instant::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Identifier of a signed-in user, as issued by the OAuth provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Store key of a topic under `topics/{userId}/`.
///
/// New ids come from [`crate::push_id::PushIdGenerator`] and sort in creation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only copy of the signed-in user's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Avatar URL; the UI shows a placeholder when absent
    pub image_url: Option<String>,
    /// OAuth access token used for store requests and revocation
    #[serde(skip)]
    pub access_token: Option<String>,
}

/// Sentinel written to `isArchived` when a topic is archived.
pub const ARCHIVED_SENTINEL: &str = "true";

/// Topic record as stored at `topics/{userId}/{topicId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRecord {
    /// Creation time in epoch milliseconds
    pub date: i64,
    pub topic_name: String,
    pub report_url: String,
    /// `Some("true")` when archived; absent or null when active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<String>,
}

impl TopicRecord {
    /// A record is archived when the flag is present and non-empty.
    pub fn archived(&self) -> bool {
        self.is_archived.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// A topic together with its store key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: TopicId,
    pub record: TopicRecord,
}

impl Topic {
    pub fn new(id: TopicId, record: TopicRecord) -> Self {
        Self { id, record }
    }

    pub fn name(&self) -> &str {
        &self.record.topic_name
    }

    pub fn is_archived(&self) -> bool {
        self.record.archived()
    }

    pub fn report_url(&self) -> &str {
        &self.record.report_url
    }
}
