//! Localized UI strings.
//!
//! One static table per supported language; the active table is picked from
//! [`crate::config::AppConfig::locale`] at startup.

use std::fmt;
use std::str::FromStr;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Hu,
}

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Hu => &HU,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hu => "hu",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "hu" | "hu-hu" => Ok(Locale::Hu),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

#[derive(Debug)]
pub struct NavbarStrings {
    pub my_topics_menu: &'static str,
    pub search_placeholder: &'static str,
    pub logout_button: &'static str,
    pub profile_alt: &'static str,
}

#[derive(Debug)]
pub struct ModalStrings {
    pub title: &'static str,
    pub input_placeholder: &'static str,
    pub create_button: &'static str,
    pub close_label: &'static str,
    pub error_empty_name: &'static str,
    pub error_used_name: &'static str,
    pub on_success: &'static str,
}

#[derive(Debug)]
pub struct NotificationStrings {
    pub on_archive: &'static str,
    pub on_activate: &'static str,
    pub on_copy_to_clipboard: &'static str,
    pub on_copy_failed: &'static str,
    pub topic_not_found: &'static str,
}

#[derive(Debug)]
pub struct TopicStrings {
    pub create_topic_text: &'static str,
    pub show_archived_topics: &'static str,
    pub archived: &'static str,
    pub menu_archive: &'static str,
    pub menu_copy_link: &'static str,
    pub menu_to_active: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub empty: &'static str,
    pub modal: ModalStrings,
    pub notification: NotificationStrings,
}

#[derive(Debug)]
pub struct LoginStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sign_in_button: &'static str,
    pub signing_in: &'static str,
    pub sign_in_failed: &'static str,
}

#[derive(Debug)]
pub struct DetailStrings {
    pub created: &'static str,
    pub status_active: &'static str,
    pub status_archived: &'static str,
    pub report_link: &'static str,
    pub report_title: &'static str,
    pub back: &'static str,
    pub not_found: &'static str,
}

/// Every user-visible string of the app.
#[derive(Debug)]
pub struct Strings {
    pub navbar: NavbarStrings,
    pub user_topics: TopicStrings,
    pub login: LoginStrings,
    pub detail: DetailStrings,
}

pub static EN: Strings = Strings {
    navbar: NavbarStrings {
        my_topics_menu: "My topics",
        search_placeholder: "Search topics…",
        logout_button: "Sign out",
        profile_alt: "Profile",
    },
    user_topics: TopicStrings {
        create_topic_text: "Create topic",
        show_archived_topics: "Show archived topics",
        archived: "Archived",
        menu_archive: "Archive",
        menu_copy_link: "Copy link",
        menu_to_active: "Activate",
        loading: "Loading topics…",
        load_failed: "Your topics could not be loaded.",
        empty: "No topics match your search.",
        modal: ModalStrings {
            title: "New topic",
            input_placeholder: "Topic name",
            create_button: "Create",
            close_label: "Close",
            error_empty_name: "Please enter a topic name.",
            error_used_name: "You already have a topic with this name.",
            on_success: "Topic created successfully.",
        },
        notification: NotificationStrings {
            on_archive: "Topic archived successfully.",
            on_activate: "Topic activated successfully.",
            on_copy_to_clipboard: "Report link copied to clipboard.",
            on_copy_failed: "Could not copy the report link.",
            topic_not_found: "This topic no longer exists.",
        },
    },
    login: LoginStrings {
        title: "Topicboard",
        subtitle: "Collect feedback on your topics and share the reports.",
        sign_in_button: "Sign in with Google",
        signing_in: "Signing in…",
        sign_in_failed: "Sign-in failed. Please try again.",
    },
    detail: DetailStrings {
        created: "Created",
        status_active: "Active",
        status_archived: "Archived",
        report_link: "Report link",
        report_title: "Report",
        back: "Back to my topics",
        not_found: "Topic not found.",
    },
};

pub static HU: Strings = Strings {
    navbar: NavbarStrings {
        my_topics_menu: "Témáim",
        search_placeholder: "Témák keresése…",
        logout_button: "Kijelentkezés",
        profile_alt: "Profil",
    },
    user_topics: TopicStrings {
        create_topic_text: "Téma létrehozása",
        show_archived_topics: "Archivált témák mutatása",
        archived: "Archivált",
        menu_archive: "Archiválás",
        menu_copy_link: "Link másolása",
        menu_to_active: "Aktiválás",
        loading: "Témák betöltése…",
        load_failed: "A témák betöltése nem sikerült.",
        empty: "Nincs a keresésnek megfelelő téma.",
        modal: ModalStrings {
            title: "Új téma",
            input_placeholder: "Téma neve",
            create_button: "Létrehozás",
            close_label: "Bezárás",
            error_empty_name: "Adja meg a téma nevét.",
            error_used_name: "Már létezik ilyen nevű témája.",
            on_success: "Sikeresen létrehozta a témát.",
        },
        notification: NotificationStrings {
            on_archive: "Sikeresen archiválta a témát.",
            on_activate: "Sikeresen aktiválta a témát.",
            on_copy_to_clipboard: "A riport linkje a vágólapra került.",
            on_copy_failed: "Nem sikerült kimásolni a riport linkjét.",
            topic_not_found: "Ez a téma már nem létezik.",
        },
    },
    login: LoginStrings {
        title: "Topicboard",
        subtitle: "Gyűjtsön visszajelzést a témáira, és ossza meg a riportokat.",
        sign_in_button: "Bejelentkezés Google-fiókkal",
        signing_in: "Bejelentkezés…",
        sign_in_failed: "A bejelentkezés nem sikerült. Próbálja újra.",
    },
    detail: DetailStrings {
        created: "Létrehozva",
        status_active: "Aktív",
        status_archived: "Archivált",
        report_link: "Riport link",
        report_title: "Riport",
        back: "Vissza a témáimhoz",
        not_found: "A téma nem található.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" HU ".parse::<Locale>().unwrap(), Locale::Hu);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_activate_message_is_localized() {
        assert_eq!(
            Locale::Hu.strings().user_topics.notification.on_activate,
            "Sikeresen aktiválta a témát."
        );
        assert_ne!(
            Locale::En.strings().user_topics.notification.on_activate,
            Locale::Hu.strings().user_topics.notification.on_activate
        );
    }
}
