use crate::config::SiteConfig;
use crate::format::format_long_date;
use crate::mount::use_mount_state;
use chrono::{DateTime, Utc};
use leptos::*;

/// Long-form date, rendered only after mount.
#[component]
pub fn ClientDate(date: DateTime<Utc>) -> impl IntoView {
    let locale = use_context::<SiteConfig>().unwrap_or_default().locale;
    let mounted = use_mount_state();

    view! {
        <time datetime=date.format("%Y-%m-%d").to_string()>
            {move || {
                mounted
                    .get()
                    .gate(|| format_long_date(date, &locale))
                    .unwrap_or_else(|| "\u{2026}".to_string())
            }}
        </time>
    }
}
