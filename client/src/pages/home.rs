//! Landing page.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::nav::DETECT_ROUTE;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>().session();
    let greeting = move || {
        session.with(|s| {
            s.identity()
                .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome back, {}", user.username))
        })
    };

    view! {
        <section class="home">
            <h1>{greeting}</h1>
            <p class="home__lead">
                "Upload a photo of a flag and the classifier will tell you which country it belongs to."
            </p>
            <a href=DETECT_ROUTE class="login-button">"Detect a flag"</a>
        </section>
    }
}
