//! Login page: username + password against the session store.
//!
//! A `?redirect=` query parameter, set by route guards, names where a
//! non-admin goes after signing in. Admins always land on the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::SessionStore;
use crate::util::auth::{
    REGISTER_ROUTE, RETURN_PARAM, already_authenticated_target, post_login_target, sanitize_return_target,
};

pub(crate) const MISSING_CREDENTIALS: &str = "Username and password are required";

/// Trim the username and require both fields.
///
/// The password is sent as typed; only emptiness is checked here.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.session();
    let navigate = use_navigate();
    let query = use_query_map();
    let return_target = Memo::new(move |_| query.with(|q| sanitize_return_target(q.get(RETURN_PARAM).as_deref())));

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    // Set once this page's own submit succeeded and navigated.
    let submitted = RwSignal::new(false);

    // A visitor who is already signed in never sees the form.
    let leave = navigate.clone();
    Effect::new(move || {
        let target = session.with(|s| already_authenticated_target(s, &return_target.get()));
        if let Some(target) = target
            && !submitted.get_untracked()
        {
            leave(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (name, secret) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let store = store.clone();
        let navigate = navigate.clone();
        let target = return_target.get_untracked();
        leptos::task::spawn_local(async move {
            match store.login(&name, &secret).await {
                Ok(identity) => {
                    submitted.set(true);
                    busy.set(false);
                    navigate(&post_login_target(&identity, &target), NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Flag Detector"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href=REGISTER_ROUTE>"Register"</a>
                </p>
            </div>
        </div>
    }
}
