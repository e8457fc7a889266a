//! Load state for data fetched by a page.
//!
//! DESIGN
//! ======
//! Pages keep one `RwSignal<Remote<T>>` per fetch instead of separate
//! `loading`/`error`/`data` signals, so the three can never disagree.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Remote<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[cfg(test)]
    pub(crate) fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for Remote<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Run `fetch` in the browser and store its outcome in `target`.
///
/// During server rendering nothing is fetched and `target` stays
/// [`Remote::Loading`], which matches what hydration starts from.
pub fn spawn_load<T, F, Fut>(target: leptos::prelude::RwSignal<Remote<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: std::future::Future<Output = Result<T, ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::Set;
        target.set(Remote::Loading);
        leptos::task::spawn_local(async move {
            target.set(Remote::from(fetch().await));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, fetch);
    }
}
