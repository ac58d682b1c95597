use leptos::*;

/// Headline counter tile
#[component]
pub fn ImpactMetric(#[prop(into)] title: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="card impact-metric">
            <h3 class="metric-label">{title}</h3>
            <p class="metric-value">{value}</p>
        </div>
    }
}
