//! Session-dependent navigation entries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The top bar and the admin sidebar are pure functions of the session and
//! the current path; keeping them here lets them be tested without a DOM.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::session::Session;
use crate::util::auth::{ADMIN_LANDING_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE};

pub const DETECT_ROUTE: &str = "/detect";
pub const HISTORY_ROUTE: &str = "/user/history";

/// One entry in the top navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEntry {
    Detect,
    History,
    Admin,
    Logout,
    Login,
    Register,
}

impl NavEntry {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Detect => "Detect",
            Self::History => "My history",
            Self::Admin => "Admin",
            Self::Logout => "Log out",
            Self::Login => "Log in",
            Self::Register => "Register",
        }
    }

    /// Link target; `None` for entries that are actions rather than links.
    #[must_use]
    pub fn href(self) -> Option<&'static str> {
        match self {
            Self::Detect => Some(DETECT_ROUTE),
            Self::History => Some(HISTORY_ROUTE),
            Self::Admin => Some(ADMIN_LANDING_ROUTE),
            Self::Logout => None,
            Self::Login => Some(LOGIN_ROUTE),
            Self::Register => Some(REGISTER_ROUTE),
        }
    }
}

/// Entries to show for `session`.
///
/// While bootstrapping only the public entries are shown, so an admin does
/// not see a login link flash before the session resolves.
#[must_use]
pub fn nav_entries(session: &Session) -> Vec<NavEntry> {
    let mut entries = vec![NavEntry::Detect];
    if !session.is_ready() {
        return entries;
    }
    if session.is_authenticated() {
        entries.push(NavEntry::History);
        if session.is_privileged() {
            entries.push(NavEntry::Admin);
        }
        entries.push(NavEntry::Logout);
    } else {
        entries.push(NavEntry::Login);
        entries.push(NavEntry::Register);
    }
    entries
}

/// Admin sidebar sections as `(href, label)`.
pub const ADMIN_SECTIONS: [(&str, &str); 5] = [
    (ADMIN_LANDING_ROUTE, "Dashboard"),
    ("/admin/users", "Users"),
    ("/admin/detection-logs", "Detection logs"),
    ("/admin/model-info", "Model info"),
    ("/admin/manual-calculation", "Manual calculation"),
];

/// Whether `href` is the section currently shown at `pathname`.
#[must_use]
pub fn is_active_section(pathname: &str, href: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}
