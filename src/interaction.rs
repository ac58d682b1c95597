use std::cell::Cell;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Vibration length for a slider step, in milliseconds
pub const SLIDER_PULSE_MS: u32 = 10;

/// User actions reported to Umami, each at most once per page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    EstimatorUsed,
    EventsFiltered,
    ResourcesFiltered,
}

impl Interaction {
    pub fn event_name(self) -> &'static str {
        match self {
            Interaction::EstimatorUsed => "estimator-used",
            Interaction::EventsFiltered => "events-filtered",
            Interaction::ResourcesFiltered => "resources-filtered",
        }
    }

    fn mask(self) -> u8 {
        match self {
            Interaction::EstimatorUsed => 0b001,
            Interaction::EventsFiltered => 0b010,
            Interaction::ResourcesFiltered => 0b100,
        }
    }
}

/// Interactions already sent during this page view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reported(u8);

impl Reported {
    /// Record `interaction`; true only the first time it is seen.
    pub fn first_time(&mut self, interaction: Interaction) -> bool {
        let seen = self.0 & interaction.mask() != 0;
        self.0 |= interaction.mask();
        !seen
    }
}

thread_local! {
    static REPORTED: Cell<Reported> = const { Cell::new(Reported(0)) };
}

fn umami_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("umami")).unwrap_or(false)
}

/// Send `interaction` to Umami unless it was already sent. Blocked or missing
/// analytics are skipped silently.
pub fn report_once(interaction: Interaction) {
    let first = REPORTED.with(|cell| {
        let mut reported = cell.get();
        let first = reported.first_time(interaction);
        cell.set(reported);
        first
    });
    if !first {
        return;
    }
    log::debug!("First {} interaction", interaction.event_name());
    if umami_loaded() {
        umami_track(interaction.event_name());
    }
}

/// Vibrate for `duration_ms`. Returns false where the device or browser has no
/// vibration support.
pub fn pulse(duration_ms: u32) -> bool {
    web_sys::window().is_some_and(|w| w.navigator().vibrate_with_duration(duration_ms))
}
