use crate::storage::TopicSnapshot;
use crate::types::Topic;

use super::filter::filter_topics;

/// Load state of a user's topic list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the first snapshot
    #[default]
    Loading,
    /// At least one snapshot has arrived
    Loaded,
    /// The first read failed; nothing to show yet
    Failed,
}

/// The last snapshot received for the signed-in user.
///
/// Concurrent edits from other clients are resolved by whichever snapshot
/// arrives last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicListModel {
    state: LoadState,
    topics: Vec<Topic>,
}

impl TopicListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection and marks the list as loaded.
    pub fn apply_snapshot(&mut self, snapshot: TopicSnapshot) {
        self.topics = snapshot;
        self.state = LoadState::Loaded;
    }

    /// Records a failed read.
    ///
    /// Before the first snapshot this ends the loading state. Once topics
    /// are shown they stay, since a later snapshot will replace them.
    pub fn apply_error(&mut self) {
        if self.state == LoadState::Loading {
            self.state = LoadState::Failed;
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Exact, case-sensitive name lookup.
    pub fn contains_name(&self, name: &str) -> bool {
        self.topics.iter().any(|topic| topic.name() == name)
    }

    /// Topics to render; see [`filter_topics`].
    pub fn visible(&self, search_text: &str, show_archived: bool) -> Vec<&Topic> {
        filter_topics(&self.topics, search_text, show_archived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TopicId, TopicRecord};

    fn snapshot(names: &[&str]) -> TopicSnapshot {
        names
            .iter()
            .map(|name| {
                Topic::new(
                    TopicId::new(*name),
                    TopicRecord {
                        date: 0,
                        topic_name: name.to_string(),
                        report_url: String::new(),
                        is_archived: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_loading_to_loaded() {
        let mut model = TopicListModel::new();
        assert_eq!(model.state(), LoadState::Loading);

        // An empty subtree still finishes loading
        model.apply_snapshot(Vec::new());
        assert_eq!(model.state(), LoadState::Loaded);
        assert!(model.topics().is_empty());
    }

    #[test]
    fn test_repeated_snapshots_are_idempotent() {
        let mut model = TopicListModel::new();
        model.apply_snapshot(snapshot(&["a", "b"]));
        let first = model.clone();
        model.apply_snapshot(snapshot(&["a", "b"]));
        assert_eq!(model, first);
    }

    #[test]
    fn test_last_snapshot_wins() {
        let mut model = TopicListModel::new();
        model.apply_snapshot(snapshot(&["a", "b"]));
        model.apply_snapshot(snapshot(&["c"]));
        assert_eq!(model.topics().len(), 1);
        assert!(model.contains_name("c"));
        assert!(!model.contains_name("a"));
    }

    #[test]
    fn test_failed_first_read_ends_loading() {
        let mut model = TopicListModel::new();
        model.apply_error();
        assert_eq!(model.state(), LoadState::Failed);

        // Recovers with the next snapshot
        model.apply_snapshot(snapshot(&["a"]));
        assert_eq!(model.state(), LoadState::Loaded);
    }

    #[test]
    fn test_error_after_load_keeps_topics() {
        let mut model = TopicListModel::new();
        model.apply_snapshot(snapshot(&["a"]));
        model.apply_error();
        assert_eq!(model.state(), LoadState::Loaded);
        assert_eq!(model.topics().len(), 1);
    }

    #[test]
    fn test_contains_name_is_case_sensitive() {
        let mut model = TopicListModel::new();
        model.apply_snapshot(snapshot(&["Q1"]));
        assert!(model.contains_name("Q1"));
        assert!(!model.contains_name("q1"));
    }
}
