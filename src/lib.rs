pub mod community;
pub mod components;
pub mod config;
pub mod data;
pub mod format;
pub mod funding;
pub mod interaction;
pub mod logging;
pub mod mount;
pub mod pages;

use components::NavBar;
use config::{load_site_config, SiteConfig};
use leptos::*;
use leptos_router::*;
use log::LevelFilter;
use pages::{EventsPage, GovernancePage, HomePage, LearningPage, NotFoundPage, PageError};
use wasm_bindgen::prelude::*;

/// Root component: shares the site config and catches anything the pages throw.
#[component]
fn Root(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <ErrorBoundary fallback=|errors| view! { <PageError errors=errors/> }>
            <Router>
                <NavBar/>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/governance" view=GovernancePage/>
                    <Route path="/events" view=EventsPage/>
                    <Route path="/learning" view=LearningPage/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Installed before the config is parsed so its warnings reach the console
    logging::init(LevelFilter::Info);
    let config = load_site_config();
    log::set_max_level(config.level_filter());
    log::info!("Starting with locale {} ({})", config.locale, config.currency);
    mount_to_body(move || view! { <Root config=config/> });
}
