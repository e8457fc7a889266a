//! Step-by-step trace of how the classifier scores one image.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::util::remote::Remote;

/// Pretty-print a calculation trace for display in a `<pre>`.
pub(crate) fn render_trace(trace: &serde_json::Value) -> String {
    serde_json::to_string_pretty(trace).unwrap_or_else(|_| trace.to_string())
}

#[component]
pub fn AdminManualCalculationPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let outcome = RwSignal::new(None::<Remote<String>>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::pages::detect::selected_file(&ev) else {
                return;
            };
            outcome.set(Some(Remote::Loading));
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = api.manual_calculation(&file).await.map(|trace| render_trace(&trace));
                outcome.set(Some(Remote::from(result)));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, &api);
        }
    };

    view! {
        <h1>"Manual calculation"</h1>
        <label class="detect__upload">
            <span>"Choose an image"</span>
            <input type="file" accept="image/*" on:change=on_change/>
        </label>
        {move || {
            outcome
                .get()
                .map(|state| match state {
                    Remote::Loading => view! { <p class="detect__status">"Calculating..."</p> }.into_any(),
                    Remote::Failed(msg) => view! { <p class="form-error" role="alert">{msg}</p> }.into_any(),
                    Remote::Loaded(trace) => view! { <pre class="calculation-trace">{trace}</pre> }.into_any(),
                })
        }}
    }
}
