//! Table of detection log rows shared by the history and admin views.

use leptos::prelude::*;

use crate::net::types::{DetectionLog, LogPage};
use crate::util::detection::format_confidence;

/// Render one page of logs with its totals line.
#[component]
pub fn LogTable(
    page: LogPage,
    /// Show the requester columns (IP, user) that only admins see.
    #[prop(optional)]
    show_requester: bool,
) -> impl IntoView {
    let summary = format!("Page {} of {} ({} entries)", page.current_page.max(1), page.pages.max(1), page.total);
    if page.logs.is_empty() {
        return view! { <p class="log-table__empty">"No detections yet."</p> }.into_any();
    }
    let rows = page
        .logs
        .into_iter()
        .map(|log| view! { <LogRow log show_requester/> })
        .collect_view();

    view! {
        <table class="log-table">
            <thead>
                <tr>
                    <th>"Time"</th>
                    <th>"Flag"</th>
                    <th>"Confidence"</th>
                    {show_requester.then(|| view! {
                        <th>"IP address"</th>
                        <th>"User"</th>
                    })}
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
        <p class="log-table__summary">{summary}</p>
    }
    .into_any()
}

#[component]
fn LogRow(log: DetectionLog, show_requester: bool) -> impl IntoView {
    let flag = log.flag_detected.unwrap_or_else(|| "unknown".to_owned());
    let confidence = log.confidence.map_or_else(|| "-".to_owned(), format_confidence);
    let ip = log.ip_address.unwrap_or_default();
    let user = log.user_id.map_or_else(|| "anonymous".to_owned(), |id| format!("#{id}"));

    view! {
        <tr>
            <td>{log.timestamp}</td>
            <td>{flag}</td>
            <td>{confidence}</td>
            {show_requester.then(|| view! {
                <td>{ip}</td>
                <td>{user}</td>
            })}
        </tr>
    }
}
