//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purely derived from the session: the entries come from
//! `util::nav::nav_entries`, and the only action, logout, goes through the
//! session store so every guard on screen reacts to it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::auth::HOME_ROUTE;
use crate::util::nav::nav_entries;

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.session();
    let navigate = use_navigate();
    let logging_out = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            store.logout().await;
            logging_out.set(false);
            navigate(HOME_ROUTE, NavigateOptions::default());
        });
    };

    let username = move || session.with(|s| s.identity().map(|u| u.username.clone()));

    view! {
        <nav class="navbar">
            <a href=HOME_ROUTE class="navbar__brand">"Flag Detector"</a>
            <span class="navbar__spacer"></span>
            {move || {
                session
                    .with(nav_entries)
                    .into_iter()
                    .map(|entry| match entry.href() {
                        Some(href) => view! {
                            <a href=href class="navbar__link">{entry.label()}</a>
                        }
                        .into_any(),
                        None => view! {
                            <button
                                class="navbar__link navbar__logout"
                                on:click=on_logout.clone()
                                disabled=move || logging_out.get()
                            >
                                {entry.label()}
                            </button>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <Show when=move || username().is_some()>
                <span class="navbar__user">{move || username().unwrap_or_default()}</span>
            </Show>
        </nav>
    }
}
