use crate::types::Topic;

/// Case-insensitive substring match on the topic name.
///
/// An empty search matches everything.
pub fn matches_search(topic: &Topic, search_text: &str) -> bool {
    search_text.is_empty()
        || topic
            .name()
            .to_lowercase()
            .contains(&search_text.to_lowercase())
}

/// Topics to render for the current search text and archived toggle.
///
/// With `show_archived` every topic is a candidate, otherwise only active
/// ones. Store order is kept.
pub fn filter_topics<'a>(
    topics: &'a [Topic],
    search_text: &str,
    show_archived: bool,
) -> Vec<&'a Topic> {
    topics
        .iter()
        .filter(|topic| show_archived || !topic.is_archived())
        .filter(|topic| matches_search(topic, search_text))
        .collect()
}
