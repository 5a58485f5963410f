//! Client-side routes.
//!
//! Routes live in the URL fragment (`{origin}/#/report/{user}/{topic}`), so a
//! shared report link opens the app directly on the report view.

use std::fmt;

use crate::types::{TopicId, UserId};

/// Every view the app can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` - the signed-in user's topic list
    TopicList,
    /// `/login`
    Login,
    /// `/topic/:userId/:topicId?page=N`
    Topic {
        user_id: UserId,
        topic_id: TopicId,
        page: u32,
    },
    /// `/report/:userId/:topicId`
    Report { user_id: UserId, topic_id: TopicId },
}

impl Route {
    /// Route opened when a topic card is clicked.
    pub fn topic(user_id: UserId, topic_id: TopicId) -> Self {
        Route::Topic {
            user_id,
            topic_id,
            page: 0,
        }
    }

    /// Parses a route path or location fragment.
    ///
    /// Accepts `#/report/u/t`, `/report/u/t` and `report/u/t`. Unknown or
    /// malformed paths resolve to [`Route::TopicList`].
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = match trimmed.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (trimmed, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["login"] => Route::Login,
            ["topic", user, topic] => Route::Topic {
                user_id: UserId::new(*user),
                topic_id: TopicId::new(*topic),
                page: query.and_then(page_param).unwrap_or(0),
            },
            ["report", user, topic] => Route::Report {
                user_id: UserId::new(*user),
                topic_id: TopicId::new(*topic),
            },
            _ => Route::TopicList,
        }
    }

    /// Whether the route can be shown without a signed-in user.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Report { .. })
    }
}

fn page_param(query: &str) -> Option<u32> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::TopicList => f.write_str("/"),
            Route::Login => f.write_str("/login"),
            Route::Topic {
                user_id,
                topic_id,
                page,
            } => write!(f, "/topic/{}/{}?page={}", user_id, topic_id, page),
            Route::Report { user_id, topic_id } => write!(f, "/report/{}/{}", user_id, topic_id),
        }
    }
}

/// Builds the shareable report URL for a topic.
///
/// Deterministic in `{origin, user_id, topic_id}`; a trailing slash on the
/// origin is ignored.
pub fn report_url(origin: &str, user_id: &UserId, topic_id: &TopicId) -> String {
    let route = Route::Report {
        user_id: user_id.clone(),
        topic_id: topic_id.clone(),
    };
    format!("{}/#{}", origin.trim_end_matches('/'), route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (UserId, TopicId) {
        (UserId::new("1084"), TopicId::new("-MxYz123"))
    }

    #[test]
    fn test_report_url_format() {
        let (user, topic) = ids();
        assert_eq!(
            report_url("https://topics.example.com", &user, &topic),
            "https://topics.example.com/#/report/1084/-MxYz123"
        );
        assert_eq!(
            report_url("https://topics.example.com/", &user, &topic),
            "https://topics.example.com/#/report/1084/-MxYz123"
        );
    }

    #[test]
    fn test_report_url_round_trips_into_router() {
        let (user, topic) = ids();
        let url = url::Url::parse(&report_url("http://localhost:8080", &user, &topic)).unwrap();
        assert_eq!(
            Route::parse(url.fragment().unwrap_or("")),
            Route::Report {
                user_id: user,
                topic_id: topic
            }
        );
    }

    #[test]
    fn test_topic_route_with_page() {
        let route = Route::parse("#/topic/u1/t1?page=3");
        assert_eq!(
            route,
            Route::Topic {
                user_id: UserId::new("u1"),
                topic_id: TopicId::new("t1"),
                page: 3
            }
        );
        assert_eq!(route.to_string(), "/topic/u1/t1?page=3");
    }

    #[test]
    fn test_topic_route_defaults_to_first_page() {
        let (user, topic) = ids();
        assert_eq!(
            Route::parse("/topic/1084/-MxYz123"),
            Route::topic(user.clone(), topic.clone())
        );
        assert_eq!(
            Route::topic(user, topic).to_string(),
            "/topic/1084/-MxYz123?page=0"
        );
    }

    #[test]
    fn test_simple_routes() {
        assert_eq!(Route::parse(""), Route::TopicList);
        assert_eq!(Route::parse("#/"), Route::TopicList);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/nope/at/all/x"), Route::TopicList);
        assert_eq!(Route::Login.to_string(), "/login");
    }

    #[test]
    fn test_public_routes() {
        let (user, topic) = ids();
        assert!(Route::Login.is_public());
        assert!(Route::Report {
            user_id: user.clone(),
            topic_id: topic.clone()
        }
        .is_public());
        assert!(!Route::TopicList.is_public());
        assert!(!Route::topic(user, topic).is_public());
    }
}
