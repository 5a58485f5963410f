//! Transient user-facing notifications.

use crate::error::TopicError;
use crate::strings::Strings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

/// A toast to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Error toast for a failed topic operation.
    ///
    /// Validation failures use the localized text; store failures carry the
    /// store's own message.
    pub fn from_error(err: &TopicError, strings: &Strings) -> Self {
        let texts = &strings.user_topics;
        let message = match err {
            TopicError::Validation => texts.modal.error_empty_name.to_string(),
            TopicError::DuplicateName(_) => texts.modal.error_used_name.to_string(),
            TopicError::NotFound(_) => texts.notification.topic_not_found.to_string(),
            TopicError::StoreWrite(message) => message.clone(),
            TopicError::Store(e) => e.to_string(),
        };
        Self::error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreError;
    use crate::strings::Locale;

    #[test]
    fn test_error_messages() {
        let strings = Locale::En.strings();

        let empty = Notification::from_error(&TopicError::Validation, strings);
        assert_eq!(empty.severity, Severity::Error);
        assert_eq!(empty.message, strings.user_topics.modal.error_empty_name);

        let dup = Notification::from_error(&TopicError::DuplicateName("Q1".into()), strings);
        assert_eq!(dup.message, strings.user_topics.modal.error_used_name);

        let write = Notification::from_error(
            &TopicError::StoreWrite("Permission denied: topics/u/t".into()),
            strings,
        );
        assert_eq!(write.message, "Permission denied: topics/u/t");

        let read = Notification::from_error(
            &TopicError::Store(StoreError::Network("offline".into())),
            strings,
        );
        assert_eq!(read.message, "Network error: offline");
    }
}
