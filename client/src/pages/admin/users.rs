//! User list plus a form for creating accounts (optionally admins).

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::guard::LoadingPlaceholder;
use crate::net::api::HttpApi;
use crate::net::types::{NewUser, UserList, UserRecord};
use crate::pages::register::validate_account_input;
use crate::util::remote::{Remote, spawn_load};

/// Validate the create-user form the same way self-registration is validated.
pub(crate) fn build_new_user(
    username: &str,
    email: &str,
    password: &str,
    is_admin: bool,
) -> Result<NewUser, &'static str> {
    let input = validate_account_input(username, email, password)?;
    Ok(NewUser { username: input.username, email: input.email, password: input.password, is_admin })
}

pub(crate) fn role_label(user: &UserRecord) -> &'static str {
    if user.identity.is_privileged { "Admin" } else { "User" }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let users = RwSignal::new(Remote::<UserList>::Loading);
    let reload = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_load(users, move || async move { api.fetch_users().await });
        }
    };
    reload();

    view! {
        <h1>"Users"</h1>
        <CreateUserForm api on_created=reload/>
        {move || match users.get() {
            Remote::Loading => view! { <LoadingPlaceholder/> }.into_any(),
            Remote::Failed(msg) => view! { <p class="form-error" role="alert">{msg}</p> }.into_any(),
            Remote::Loaded(list) => view! { <UserTable users=list.users/> }.into_any(),
        }}
    }
}

#[component]
fn UserTable(users: Vec<UserRecord>) -> impl IntoView {
    let rows = users
        .into_iter()
        .map(|user| {
            let role = role_label(&user);
            view! {
                <tr>
                    <td>{user.identity.id}</td>
                    <td>{user.identity.username}</td>
                    <td>{user.identity.email}</td>
                    <td>{role}</td>
                    <td>{user.created_at.unwrap_or_default()}</td>
                    <td>{user.last_login.unwrap_or_else(|| "never".to_owned())}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Username"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Created"</th>
                    <th>"Last login"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn CreateUserForm(api: HttpApi, on_created: impl Fn() + Clone + Send + Sync + 'static) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_admin = RwSignal::new(false);
    let message = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let new_user = match build_new_user(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            is_admin.get_untracked(),
        ) {
            Ok(new_user) => new_user,
            Err(msg) => {
                message.set(Some(Err(msg.to_owned())));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        let api = api.clone();
        let on_created = on_created.clone();
        leptos::task::spawn_local(async move {
            match api.create_user(&new_user).await {
                Ok(created) => {
                    message.set(Some(Ok(format!("Created {}", created.user.identity.username))));
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    is_admin.set(false);
                    on_created();
                }
                Err(e) => message.set(Some(Err(e.to_string()))),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="create-user" on:submit=on_submit>
            <input
                class="login-input"
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="login-input"
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="login-input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <label class="create-user__admin">
                <input
                    type="checkbox"
                    prop:checked=move || is_admin.get()
                    on:change=move |ev| is_admin.set(event_target_checked(&ev))
                />
                "Admin"
            </label>
            <button class="login-button" type="submit" disabled=move || busy.get()>"Create user"</button>
        </form>
        {move || {
            message
                .get()
                .map(|outcome| match outcome {
                    Ok(text) => view! { <p class="login-message">{text}</p> }.into_any(),
                    Err(text) => view! { <p class="form-error" role="alert">{text}</p> }.into_any(),
                })
        }}
    }
}
