//! Admin overview: totals and the latest detections.

use leptos::prelude::*;

use crate::components::guard::LoadingPlaceholder;
use crate::components::log_table::LogTable;
use crate::net::api::HttpApi;
use crate::net::types::{DashboardData, LogPage};
use crate::util::remote::{Remote, spawn_load};

/// Wrap the dashboard's recent detections as a single table page.
pub(crate) fn recent_page(data: &DashboardData) -> LogPage {
    let count = data.recent_detections.len() as u64;
    LogPage { logs: data.recent_detections.clone(), total: count, pages: 1, current_page: 1 }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let data = RwSignal::new(Remote::<DashboardData>::Loading);
    spawn_load(data, move || async move { api.fetch_dashboard().await });

    view! {
        <h1>"Dashboard"</h1>
        {move || match data.get() {
            Remote::Loading => view! { <LoadingPlaceholder/> }.into_any(),
            Remote::Failed(msg) => view! { <p class="form-error" role="alert">{msg}</p> }.into_any(),
            Remote::Loaded(data) => {
                let page = recent_page(&data);
                view! {
                    <div class="stat-cards">
                        <div class="stat-card">
                            <span class="stat-card__value">{data.total_users}</span>
                            <span class="stat-card__label">"Users"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__value">{data.total_detections}</span>
                            <span class="stat-card__label">"Detections"</span>
                        </div>
                    </div>
                    <h2>"Recent detections"</h2>
                    <LogTable page show_requester=true/>
                }
                .into_any()
            }
        }}
    }
}
