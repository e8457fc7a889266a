//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] is created by the root `App` and provided as context.
//! Route guards, the login/register pages, and the navigation bar all read
//! the same signal, so a transition performed anywhere is observed
//! everywhere in the same render pass.
//!
//! DESIGN
//! ======
//! - [`Session`] fields are private. Readers get accessors; only the four
//!   store operations (`bootstrap`, `login`, `register`, `logout`) write.
//! - Privilege is never stored on its own: [`Session::is_privileged`] reads it
//!   off the current identity every time.
//! - Each completed operation performs exactly one signal update.
//! - Responses land in shared state, never component-local state, so a reply
//!   that arrives after the initiating page unmounted is still applied.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api::{HttpApi, SessionApi};
use crate::net::error::ApiError;
use crate::net::types::UserIdentity;

/// Whether the startup session fetch has settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Startup fetch still in flight; nothing is known about the visitor yet.
    #[default]
    Bootstrapping,
    /// Startup fetch settled. Never reverts.
    Ready,
}

/// Snapshot of who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<UserIdentity>,
    phase: Phase,
    /// Bumped by every login/logout so a late bootstrap reply can tell it
    /// has been overtaken.
    revision: u64,
}

impl Session {
    /// A settled session, as it looks after bootstrap.
    #[cfg(test)]
    pub(crate) fn ready(identity: Option<UserIdentity>) -> Self {
        Self { identity, phase: Phase::Ready, revision: 0 }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(identity: Option<UserIdentity>, phase: Phase) -> Self {
        Self { identity, phase, revision: 0 }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Derived from the identity on every call.
    #[must_use]
    pub fn is_privileged(&self) -> bool {
        self.identity.as_ref().is_some_and(|user| user.is_privileged)
    }

    fn settle_bootstrap(&mut self, identity: Option<UserIdentity>, started_at: u64) {
        if self.phase == Phase::Ready {
            return;
        }
        if self.revision == started_at {
            self.identity = identity;
        }
        self.phase = Phase::Ready;
    }

    fn sign_in(&mut self, identity: UserIdentity) {
        self.identity = Some(identity);
        self.revision += 1;
    }

    fn sign_out(&mut self) {
        self.identity = None;
        self.revision += 1;
    }
}

/// Authoritative holder of the [`Session`].
///
/// Cheap to clone; clones share the same signal and API client.
pub struct SessionStore<A = HttpApi> {
    session: RwSignal<Session>,
    api: Arc<A>,
}

impl<A> Clone for SessionStore<A> {
    fn clone(&self) -> Self {
        Self { session: self.session, api: Arc::clone(&self.api) }
    }
}

impl<A: SessionApi> SessionStore<A> {
    /// Create a store in the `Bootstrapping` phase. Call
    /// [`SessionStore::bootstrap`] once the event loop is running.
    pub fn new(api: A) -> Self {
        Self { session: RwSignal::new(Session::default()), api: Arc::new(api) }
    }

    /// Reactive, read-only view of the session.
    #[must_use]
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Current session without subscribing the caller.
    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    /// Resolve the startup session from the identity endpoint.
    ///
    /// Any failure means "no session". Once the session is `Ready` this is a
    /// no-op and sends nothing.
    pub async fn bootstrap(&self) {
        let (ready, started_at) = self.session.with_untracked(|s| (s.is_ready(), s.revision));
        if ready {
            return;
        }
        let identity = match self.api.current_user().await {
            Ok(identity) => identity,
            Err(ApiError::Unavailable) => None,
            Err(e) => {
                leptos::logging::log!("session bootstrap failed: {e}");
                None
            }
        };
        self.session.update(|s| s.settle_bootstrap(identity, started_at));
    }

    /// Authenticate and publish the returned identity.
    ///
    /// The identity is also returned so the caller can branch navigation on
    /// it without waiting for the signal to propagate.
    ///
    /// # Errors
    ///
    /// Returns the rejection or transport error; the session is left as-is.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserIdentity, ApiError> {
        let identity = self.api.login(username, password).await?;
        self.session.update(|s| s.sign_in(identity.clone()));
        Ok(identity)
    }

    /// Create an account. Never signs the new account in.
    ///
    /// # Errors
    ///
    /// Returns the rejection or transport error.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
        self.api.register(username, email, password).await
    }

    /// End the session. The local identity is cleared even when the server
    /// call fails.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            leptos::logging::warn!("logout request failed, clearing session locally: {e}");
        }
        self.session.update(Session::sign_out);
    }
}
