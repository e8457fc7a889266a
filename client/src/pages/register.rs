//! Account registration page.
//!
//! Registering never signs the new account in; on success the visitor is
//! sent to the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::auth::LOGIN_ROUTE;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

pub(crate) const USERNAME_REQUIRED: &str = "Username is required";
pub(crate) const EMAIL_INVALID: &str = "Enter a valid email address";
pub(crate) const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// Account fields after client-side validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AccountInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Check the fields shared by self-registration and admin user creation.
///
/// Username and email are trimmed. The server applies its own rules on top.
pub(crate) fn validate_account_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<AccountInput, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() {
        return Err(USERNAME_REQUIRED);
    }
    if !is_plausible_email(email) {
        return Err(EMAIL_INVALID);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(AccountInput { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace),
        None => false,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_account_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
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
        leptos::task::spawn_local(async move {
            match store.register(&input.username, &input.email, &input.password).await {
                Ok(()) => {
                    busy.set(false);
                    navigate(LOGIN_ROUTE, NavigateOptions::default());
                }
                // Field values stay as typed so the visitor can correct them.
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
                <h1>"Create account"</h1>
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
                        type="email"
                        name="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        autocomplete="new-password"
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=LOGIN_ROUTE>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
