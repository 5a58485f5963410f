//! App shell components: SessionShell, Navbar, SearchBar, UserMenu
//!
//! These wrap every page that needs a signed-in user.

mod navbar;
mod search_bar;
mod session_shell;
mod user_menu;

pub use navbar::Navbar;
pub use search_bar::SearchBar;
pub use session_shell::SessionShell;
pub use user_menu::UserMenu;
