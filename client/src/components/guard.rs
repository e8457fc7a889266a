//! Route guard wrapping protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route nests its content inside [`RequireSession`]. All
//! mounted guards subscribe to the same session signal, so a logout issued
//! from any page re-evaluates every guard on screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionStore;
use crate::util::auth::{GuardDecision, Requirement, guard_decision, requested_path};

/// Spinner shown while the startup session fetch is in flight.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner"></span>
            <span class="loading__label">"Loading..."</span>
        </div>
    }
}

/// Render `children` only when the session satisfies the requirement.
///
/// Shows [`LoadingPlaceholder`] while bootstrapping, nothing while a redirect
/// is pending, and the children otherwise.
#[component]
pub fn RequireSession(
    /// Require an admin session rather than any signed-in session.
    #[prop(optional)]
    privileged: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.session();
    let location = use_location();
    let navigate = use_navigate();
    let requirement = Requirement::from_privileged(privileged);

    let decision = Memo::new(move |_| {
        let path = requested_path(&location.pathname.get(), &location.search.get());
        session.with(|s| guard_decision(s, requirement, &path))
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingPlaceholder/> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
