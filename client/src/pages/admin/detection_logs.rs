//! Every user's detections, newest first.

use leptos::prelude::*;

use crate::components::guard::LoadingPlaceholder;
use crate::components::log_table::LogTable;
use crate::net::api::HttpApi;
use crate::net::types::LogPage;
use crate::pages::history::FIRST_PAGE;
use crate::util::remote::{Remote, spawn_load};

#[component]
pub fn AdminDetectionLogsPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let logs = RwSignal::new(Remote::<LogPage>::Loading);
    spawn_load(logs, move || async move { api.fetch_detection_logs(FIRST_PAGE).await });

    view! {
        <h1>"Detection logs"</h1>
        {move || match logs.get() {
            Remote::Loading => view! { <LoadingPlaceholder/> }.into_any(),
            Remote::Failed(msg) => view! { <p class="form-error" role="alert">{msg}</p> }.into_any(),
            Remote::Loaded(page) => view! { <LogTable page show_requester=true/> }.into_any(),
        }}
    }
}
