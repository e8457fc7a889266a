//! Sidebar navigation for the admin area.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::{ADMIN_SECTIONS, is_active_section};

#[component]
pub fn AdminNavbar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="admin-nav">
            {ADMIN_SECTIONS
                .iter()
                .map(|&(href, label)| {
                    let class = move || {
                        if is_active_section(&pathname.get(), href) {
                            "admin-nav__link admin-nav__link--active"
                        } else {
                            "admin-nav__link"
                        }
                    };
                    view! { <a href=href class=class>{label}</a> }
                })
                .collect_view()}
        </nav>
    }
}
