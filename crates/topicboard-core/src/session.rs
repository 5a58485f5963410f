//! Session and shared UI state.
//!
//! The signed-in user, the search text and the archived toggle are shared
//! between the app shell and the topic list. They live in one immutable
//! [`SessionState`] that only changes through [`reduce`].

use crate::types::UserProfile;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    /// Free-text filter typed into the search bar
    pub search_text: String,
    /// When false, archived topics are hidden from the list
    pub show_archived: bool,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Named changes to [`SessionState`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SignedIn(UserProfile),
    SignedOut,
    SetSearchText(String),
    ToggleShowArchived,
}

impl SessionAction {
    /// Short name for logging; never includes user data.
    pub fn name(&self) -> &'static str {
        match self {
            SessionAction::SignedIn(_) => "SIGNED_IN",
            SessionAction::SignedOut => "SIGNED_OUT",
            SessionAction::SetSearchText(_) => "SET_SEARCH_TEXT",
            SessionAction::ToggleShowArchived => "TOGGLE_SHOW_ARCHIVED_TOPICS",
        }
    }
}

/// Returns the state after applying `action`.
///
/// Signing out clears the user together with the search text and toggle, so
/// the next user starts from a clean view.
pub fn reduce(state: &SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::SignedIn(user) => SessionState {
            user: Some(user),
            ..state.clone()
        },
        SessionAction::SignedOut => SessionState::default(),
        SessionAction::SetSearchText(search_text) => SessionState {
            search_text,
            ..state.clone()
        },
        SessionAction::ToggleShowArchived => SessionState {
            show_archived: !state.show_archived,
            ..state.clone()
        },
    }
}
