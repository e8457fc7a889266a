//! Admin area. Every child route renders inside [`AdminLayout`], which holds
//! the privileged guard, so no admin page repeats the check.

pub mod dashboard;
pub mod detection_logs;
pub mod manual_calculation;
pub mod model_info;
pub mod users;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::admin_navbar::AdminNavbar;
use crate::components::guard::RequireSession;

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <RequireSession privileged=true>
            <div class="admin">
                <aside class="admin__sidebar">
                    <AdminNavbar/>
                </aside>
                <section class="admin__content">
                    <Outlet/>
                </section>
            </div>
        </RequireSession>
    }
}
