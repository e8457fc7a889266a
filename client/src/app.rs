//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::admin::{
    AdminLayout, dashboard::AdminDashboardPage, detection_logs::AdminDetectionLogsPage,
    manual_calculation::AdminManualCalculationPage, model_info::AdminModelInfoPage, users::AdminUsersPage,
};
use crate::pages::{
    detect::DetectPage, history::HistoryPage, home::HomePage, login::LoginPage, register::RegisterPage,
};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the one [`SessionStore`] for the page, provides it and the HTTP
/// client as context, and starts the session bootstrap in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = HttpApi::new(ClientConfig::from_build_env());
    let store = SessionStore::new(api.clone());
    provide_context(api);
    provide_context(store.clone());

    // The server has no session cookie to resolve, so guards render their
    // placeholder there and the browser settles the session after hydration.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move { store.bootstrap().await });
    #[cfg(not(feature = "hydrate"))]
    let _ = store;

    view! {
        <Stylesheet id="leptos" href="/pkg/flagscan.css"/>
        <Title text="Flag Detector"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("detect") view=DetectPage/>
                    <Route path=(StaticSegment("user"), StaticSegment("history")) view=HistoryPage/>
                    <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                        <Route path=StaticSegment("") view=AdminDashboardPage/>
                        <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                        <Route path=StaticSegment("users") view=AdminUsersPage/>
                        <Route path=StaticSegment("detection-logs") view=AdminDetectionLogsPage/>
                        <Route path=StaticSegment("model-info") view=AdminModelInfoPage/>
                        <Route path=StaticSegment("manual-calculation") view=AdminManualCalculationPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
