//! Shared auth routing rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, the login page, and the navigation bar must agree on where
//! a visitor belongs for a given session. Every such decision is a pure
//! function of the session snapshot and lives here, so the Leptos components
//! only wire signals to these rules.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserIdentity;
use crate::state::session::Session;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const ADMIN_LANDING_ROUTE: &str = "/admin/dashboard";

/// Query parameter carrying the path a guard bounced the visitor from.
pub const RETURN_PARAM: &str = "redirect";

/// What a protected view demands of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Any signed-in user.
    Authenticated,
    /// A signed-in admin.
    Privileged,
}

impl Requirement {
    #[must_use]
    pub fn from_privileged(privileged: bool) -> Self {
        if privileged { Self::Privileged } else { Self::Authenticated }
    }
}

/// Outcome of evaluating a guard against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not known yet; show a placeholder.
    Loading,
    /// Leave for the given path.
    Redirect(String),
    /// Show the protected content.
    Render,
}

/// Decide what a guard on `requested_path` shows for `session`.
///
/// Never redirects while bootstrapping: bouncing before the session is known
/// would send a valid admin to the login page.
#[must_use]
pub fn guard_decision(session: &Session, requirement: Requirement, requested_path: &str) -> GuardDecision {
    if !session.is_ready() {
        return GuardDecision::Loading;
    }
    if !session.is_authenticated() {
        return GuardDecision::Redirect(login_redirect_path(requested_path));
    }
    if requirement == Requirement::Privileged && !session.is_privileged() {
        return GuardDecision::Redirect(HOME_ROUTE.to_owned());
    }
    GuardDecision::Render
}

/// The path a guard records as the return target: `pathname` plus the query
/// string, if any. `search` may be given with or without its leading `?`.
#[must_use]
pub fn requested_path(pathname: &str, search: &str) -> String {
    match search.trim_start_matches('?') {
        "" => pathname.to_owned(),
        query => format!("{pathname}?{query}"),
    }
}

/// `/login?redirect=<requested path>`, with the path percent-encoded.
#[must_use]
pub fn login_redirect_path(requested_path: &str) -> String {
    format!("{LOGIN_ROUTE}?{RETURN_PARAM}={}", urlencoding::encode(requested_path))
}

/// Accept a return target only if it is a same-origin absolute path.
///
/// Anything else (missing, external URL, protocol-relative `//host`) falls
/// back to the home route.
#[must_use]
pub fn sanitize_return_target(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_owned()
        }
        _ => HOME_ROUTE.to_owned(),
    }
}

/// Where to go right after a successful login.
///
/// Admins always land on the admin dashboard, whatever page sent them to
/// log in. Everyone else returns to where the guard bounced them from.
#[must_use]
pub fn post_login_target(identity: &UserIdentity, return_target: &str) -> String {
    if identity.is_privileged {
        ADMIN_LANDING_ROUTE.to_owned()
    } else {
        return_target.to_owned()
    }
}

/// Target for a visitor who opens the login page while already signed in.
#[must_use]
pub fn already_authenticated_target(session: &Session, return_target: &str) -> Option<String> {
    session.identity().map(|identity| post_login_target(identity, return_target))
}
