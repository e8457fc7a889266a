//! The signed-in user's own detection history.

use leptos::prelude::*;

use crate::components::guard::{LoadingPlaceholder, RequireSession};
use crate::components::log_table::LogTable;
use crate::net::api::HttpApi;
use crate::net::types::LogPage;
use crate::util::remote::{Remote, spawn_load};

pub(crate) const FIRST_PAGE: u32 = 1;

#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <RequireSession>
            <History/>
        </RequireSession>
    }
}

/// Mounted only once the guard lets the visitor through, so the fetch always
/// carries a session.
#[component]
fn History() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let logs = RwSignal::new(Remote::<LogPage>::Loading);
    spawn_load(logs, move || async move { api.fetch_user_history(FIRST_PAGE).await });

    view! {
        <section class="history">
            <h1>"My detections"</h1>
            {move || match logs.get() {
                Remote::Loading => view! { <LoadingPlaceholder/> }.into_any(),
                Remote::Failed(msg) => view! { <p class="form-error" role="alert">{msg}</p> }.into_any(),
                Remote::Loaded(page) => view! { <LogTable page/> }.into_any(),
            }}
        </section>
    }
}
