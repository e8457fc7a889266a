//! Flag detection page: upload an image, show ranked predictions.
//!
//! Open to anonymous visitors. When a session exists the server attaches the
//! detection to that user's history.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::net::types::{DetectionResult, Prediction};
use crate::util::detection::{ConfidenceBand, best_prediction, format_confidence, ranked};
use crate::util::remote::Remote;

/// First file chosen in the `<input type="file">` that fired `ev`.
#[cfg(feature = "hydrate")]
pub(crate) fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    ev.target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

#[component]
pub fn DetectPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    // `None` until the first upload.
    let outcome = RwSignal::new(None::<Remote<DetectionResult>>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = selected_file(&ev) else {
                return;
            };
            outcome.set(Some(Remote::Loading));
            let api = api.clone();
            leptos::task::spawn_local(async move {
                outcome.set(Some(Remote::from(api.detect_flag(&file).await)));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, &api);
        }
    };

    view! {
        <section class="detect">
            <h1>"Detect a flag"</h1>
            <label class="detect__upload">
                <span>"Choose an image"</span>
                <input
                    type="file"
                    accept="image/*"
                    on:change=on_change
                    disabled=move || outcome.with(|o| o.as_ref().is_some_and(Remote::is_loading))
                />
            </label>
            {move || {
                outcome
                    .get()
                    .map(|state| match state {
                        Remote::Loading => view! { <p class="detect__status">"Analyzing image..."</p> }.into_any(),
                        Remote::Failed(msg) => view! { <p class="form-error" role="alert">{msg}</p> }.into_any(),
                        Remote::Loaded(result) => view! { <PredictionList predictions=result.predictions/> }.into_any(),
                    })
            }}
        </section>
    }
}

#[component]
fn PredictionList(predictions: Vec<Prediction>) -> impl IntoView {
    let Some(best) = best_prediction(&predictions).cloned() else {
        return view! { <p class="detect__status">"No flag detected in this image."</p> }.into_any();
    };
    let rows = ranked(&predictions)
        .into_iter()
        .map(|p| {
            let band = ConfidenceBand::of(p.confidence);
            let width = format!("width: {:.1}%", (p.confidence * 100.0).clamp(0.0, 100.0));
            view! {
                <li class="prediction">
                    <span class="prediction__class">{p.class}</span>
                    <span class=format!("prediction__bar {}", band.css_class()) style=width></span>
                    <span class="prediction__confidence">{format_confidence(p.confidence)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="detect__result">
            <h2>
                "Best match: " {best.class} " "
                <span class=ConfidenceBand::of(best.confidence).css_class()>{format_confidence(best.confidence)}</span>
            </h2>
            <ul class="prediction-list">{rows}</ul>
        </div>
    }
    .into_any()
}
