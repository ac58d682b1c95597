use crate::components::ClientDate;
use crate::config::SiteConfig;
use crate::format::{format_currency, format_currency_whole};
use crate::funding::{FundingRound, RoundStatus};
use crate::mount::use_mount_state;
use chrono::Utc;
use leptos::*;

#[component]
fn ProgressBar(percent: u32) -> impl IntoView {
    view! {
        <div class="progress-track">
            <div class="progress-fill" style=format!("width: {}%", percent)></div>
        </div>
    }
}

#[component]
pub fn FundingRoundCard(
    round: FundingRound,
    /// Sidebar variant: title, timing line and progress only
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let locale = config.locale_config();
    let mounted = use_mount_state();

    let progress = round.progress_percent();
    let raised = format_currency(round.total_raised, &locale);
    let pool = format_currency_whole(round.matching_pool, &locale);
    let round = store_value(round);

    // Day counts depend on the client clock
    let timing = {
        let lang = locale.locale.clone();
        move || {
            mounted
                .get()
                .gate(|| round.with_value(|r| r.timing_label(Utc::now(), &lang)))
        }
    };
    let headline_days = move || {
        mounted
            .get()
            .gate(|| round.with_value(|r| r.headline_days(Utc::now())))
    };
    let shows_progress = round.with_value(|r| r.shows_progress());
    let is_active = round.with_value(|r| r.status == RoundStatus::Active);
    let (title, status) = round.with_value(|r| (r.title.clone(), r.status));
    let raised_caption = raised.clone();
    let progress_caption = format!("{} of {} ({}%)", raised, pool, progress);

    if compact {
        return view! {
            <div class="card round-card compact">
                <div class="card-header">
                    <h3>{title}</h3>
                    <span class=status.status_class()>{status.label()}</span>
                </div>
                <p class="round-timing">{timing}</p>
                <Show when=move || shows_progress>
                    <ProgressBar percent=progress/>
                    <div class="progress-caption">
                        <span>{raised_caption.clone()}</span>
                        <span>{format!("{}%", progress)}</span>
                    </div>
                </Show>
            </div>
        }
        .into_view();
    }

    let (description, projects, contributors, start, end, days_label) = round.with_value(|r| {
        (
            r.description.clone(),
            r.projects,
            r.contributors,
            r.start_date,
            r.end_date,
            r.headline_days_label(),
        )
    });

    view! {
        <div class="card round-card">
            <div class="card-header">
                <h3>{title}</h3>
                <span class=status.status_class()>{status.label()}</span>
            </div>
            <p class="round-description">{description}</p>

            <div class="round-stats">
                <div class="round-stat">
                    <p class="stat-label">"Matching Pool"</p>
                    <p class="stat-value">{pool}</p>
                </div>
                <div class="round-stat">
                    <p class="stat-label">"Projects"</p>
                    <p class="stat-value">{projects}</p>
                </div>
                <div class="round-stat">
                    <p class="stat-label">"Contributors"</p>
                    <p class="stat-value">{contributors}</p>
                </div>
                <div class="round-stat">
                    <p class="stat-label">{days_label}</p>
                    <p class="stat-value">{headline_days}</p>
                </div>
            </div>

            <Show when=move || shows_progress>
                <div class="progress-header">
                    <span>"Funding Progress"</span>
                    <span>{progress_caption.clone()}</span>
                </div>
                <ProgressBar percent=progress/>
            </Show>

            <div class="round-dates">
                <span>"Start Date: " <ClientDate date=start/></span>
                <span class="separator">"\u{2022}"</span>
                <span>"End Date: " <ClientDate date=end/></span>
            </div>

            <div class="card-footer">
                <Show when=move || is_active>
                    <a class="button" href="/#estimator">"Support Projects"</a>
                </Show>
            </div>
        </div>
    }
    .into_view()
}
