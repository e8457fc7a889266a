//! Deployed model metadata and training metrics.

#[cfg(test)]
#[path = "model_info_test.rs"]
mod model_info_test;

use leptos::prelude::*;

use crate::components::guard::LoadingPlaceholder;
use crate::net::api::HttpApi;
use crate::net::types::{ModelInfo, ModelMetrics};
use crate::util::detection::format_confidence;
use crate::util::remote::{Remote, spawn_load};

/// One row of the per-class metrics table.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ClassMetrics {
    pub class: String,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

/// Join the three per-class maps into rows, one per class named in any map.
/// Rows are ordered by class name.
pub(crate) fn class_rows(metrics: &ModelMetrics) -> Vec<ClassMetrics> {
    let mut classes: Vec<&String> = metrics
        .precision_by_class
        .keys()
        .chain(metrics.recall_by_class.keys())
        .chain(metrics.f1_by_class.keys())
        .collect();
    classes.sort();
    classes.dedup();
    classes
        .into_iter()
        .map(|class| ClassMetrics {
            class: class.clone(),
            precision: metrics.precision_by_class.get(class).copied(),
            recall: metrics.recall_by_class.get(class).copied(),
            f1: metrics.f1_by_class.get(class).copied(),
        })
        .collect()
}

fn metric_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), format_confidence)
}

#[component]
pub fn AdminModelInfoPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let info = RwSignal::new(Remote::<ModelInfo>::Loading);
    let metrics = RwSignal::new(Remote::<ModelMetrics>::Loading);
    let metrics_api = api.clone();
    spawn_load(info, move || async move { api.fetch_model_info().await });
    spawn_load(metrics, move || async move { metrics_api.fetch_model_metrics().await });

    view! {
        <h1>"Model"</h1>
        {move || match info.get() {
            Remote::Loading => view! { <LoadingPlaceholder/> }.into_any(),
            Remote::Failed(msg) => view! { <p class="form-error" role="alert">{msg}</p> }.into_any(),
            Remote::Loaded(info) => view! { <InfoTable info/> }.into_any(),
        }}
        <h2>"Training metrics"</h2>
        {move || match metrics.get() {
            Remote::Loading => view! { <LoadingPlaceholder/> }.into_any(),
            Remote::Failed(msg) => view! { <p class="form-error" role="alert">{msg}</p> }.into_any(),
            Remote::Loaded(metrics) => view! { <MetricsTable metrics/> }.into_any(),
        }}
    }
}

#[component]
fn InfoTable(info: ModelInfo) -> impl IntoView {
    let fields = [
        ("Name", info.model_name),
        ("Version", info.version),
        ("Architecture", info.architecture),
        ("Framework", info.framework),
        ("Trained on", info.trained_on),
        ("Training date", info.training_date),
        ("Input size", info.input_size),
        ("Precision", info.precision),
        ("Recall", info.recall),
        ("mAP50", info.map50),
    ];
    let rows = fields
        .into_iter()
        .map(|(label, value)| view! { <tr><th>{label}</th><td>{value}</td></tr> })
        .collect_view();

    view! {
        <p class="model-info__description">{info.description}</p>
        <table class="model-info">
            <tbody>{rows}</tbody>
        </table>
        <p class="model-info__classes">{format!("Classes: {}", info.classes.join(", "))}</p>
    }
}

#[component]
fn MetricsTable(metrics: ModelMetrics) -> impl IntoView {
    let summary = format!(
        "{} epochs, batch size {}, {} optimizer, {:.1} h on {}",
        metrics.epochs, metrics.batch_size, metrics.optimizer, metrics.training_time_hours, metrics.training_hardware
    );
    let rows = class_rows(&metrics)
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.class}</td>
                    <td>{metric_cell(row.precision)}</td>
                    <td>{metric_cell(row.recall)}</td>
                    <td>{metric_cell(row.f1)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <p class="model-metrics__summary">{summary}</p>
        <table class="model-metrics">
            <thead>
                <tr>
                    <th>"Class"</th>
                    <th>"Precision"</th>
                    <th>"Recall"</th>
                    <th>"F1"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
