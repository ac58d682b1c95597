use crate::components::ErrorList;
use crate::config::SiteConfig;
use crate::format::{format_currency_whole, MatchingPresentation};
use crate::funding::Estimator;
use crate::interaction::{pulse, report_once, Interaction, SLIDER_PULSE_MS};
use leptos::*;

/// Interactive card: two sliders driving the matching calculator.
#[component]
pub fn QuadraticFundingExplainer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let locale = config.locale_config();
    let bounds = config.estimator;

    let estimator = create_rw_signal(Estimator::new(
        bounds.default_amount,
        bounds.default_contributors,
    ));
    let amount = create_memo(move |_| estimator.with(|e| e.amount()));
    let contributors = create_memo(move |_| estimator.with(|e| e.contributor_count()));
    let result = create_memo(move |_| estimator.with(|e| *e.result()));

    let amount_label = {
        let locale = locale.clone();
        move || format_currency_whole(amount.get(), &locale)
    };
    let impact_heading = {
        let locale = locale.clone();
        move || format!("Impact of your {}", format_currency_whole(amount.get(), &locale))
    };
    let amount_min_label = format_currency_whole(bounds.amount_min, &locale);
    let amount_max_label = format_currency_whole(bounds.amount_max, &locale);

    let figures = move || {
        result.get().map(|r| {
            let shown = MatchingPresentation::new(&r, &locale);
            view! {
                <div class="estimate-grid">
                    <div class="estimate traditional">
                        <h4>"Traditional 1:1 Matching"</h4>
                        <p class="estimate-value">{shown.traditional_match}</p>
                        <p class="estimate-note">"Matching equals your contribution"</p>
                    </div>
                    <div class="estimate quadratic">
                        <h4>"Quadratic Funding Matching"</h4>
                        <p class="estimate-value">{shown.quadratic_match}</p>
                        <p class="estimate-note">"(\u{221A}\u{03A3}c\u{1D62})\u{00B2} - \u{03A3}c\u{1D62} = Matching Amount"</p>
                    </div>
                </div>
                <div class="estimate impact">
                    <h4>{impact_heading.clone()}</h4>
                    <p class="estimate-value">{shown.per_contributor_impact}</p>
                    <p class="estimate-note">"Your contribution + share of matching"</p>
                </div>
            }
        })
    };

    view! {
        <div class="card qf-explainer">
            <h3>"How Quadratic Funding Works"</h3>
            <p>
                "Quadratic funding prioritizes the number of contributors over the size of contributions, "
                "making small donations more powerful when many people participate."
            </p>

            <div class="control-group">
                <label for="qf-amount">"Contribution Amount"</label>
                <input
                    type="range"
                    id="qf-amount"
                    min=bounds.amount_min
                    max=bounds.amount_max
                    step="1"
                    prop:value=move || amount.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            estimator.update(|e| {
                                e.set_amount(v);
                            });
                            pulse(SLIDER_PULSE_MS);
                            report_once(Interaction::EstimatorUsed);
                        }
                    }
                />
                <div class="range-labels">
                    <span class="range-bound">{amount_min_label}</span>
                    <span class="range-value">{amount_label}</span>
                    <span class="range-bound">{amount_max_label}</span>
                </div>
            </div>

            <div class="control-group">
                <label for="qf-contributors">"Number of Contributors"</label>
                <input
                    type="range"
                    id="qf-contributors"
                    min=bounds.contributors_min
                    max=bounds.contributors_max
                    step="1"
                    prop:value=move || contributors.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                            estimator.update(|e| {
                                e.set_contributor_count(v);
                            });
                            pulse(SLIDER_PULSE_MS);
                            report_once(Interaction::EstimatorUsed);
                        }
                    }
                />
                <div class="range-labels">
                    <span class="range-bound">{bounds.contributors_min}</span>
                    <span class="range-value">{move || contributors.get()}</span>
                    <span class="range-bound">{bounds.contributors_max}</span>
                </div>
            </div>

            // Invalid input is shown, never clamped
            <ErrorBoundary fallback=|errors| view! {
                <div class="estimator-error" role="alert">
                    <h4>"The estimate could not be computed"</h4>
                    <ErrorList errors=errors/>
                </div>
            }>
                {figures}
            </ErrorBoundary>

            <p class="qf-summary">
                "With quadratic funding, many small contributions can generate more matching funds than a few large ones. "
                "This democratizes funding by prioritizing community support over wealthy donors."
            </p>
        </div>
    }
}
