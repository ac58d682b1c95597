use crate::community::{
    events_by_date, load_events, project_options, Event, EventFilter, EventKind, EventSchedule,
};
use crate::components::{ClientDate, EventCard};
use crate::interaction::{report_once, Interaction};
use crate::mount::use_mount_state;
use chrono::Utc;
use leptos::*;

const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Grid,
    List,
    Calendar,
}

impl Layout {
    fn label(self) -> &'static str {
        match self {
            Layout::Grid => "Grid",
            Layout::List => "List",
            Layout::Calendar => "Calendar",
        }
    }
}

fn event_cards(events: Vec<Event>, layout: Layout) -> View {
    match layout {
        Layout::Grid | Layout::List => {
            let compact = layout == Layout::List;
            let cards = events
                .into_iter()
                .map(|e| view! { <EventCard event=e compact=compact/> })
                .collect_view();
            let class = if compact { "event-list" } else { "card-grid" };
            view! { <div class=class>{cards}</div> }.into_view()
        }
        Layout::Calendar => events_by_date(&events)
            .into_values()
            .filter_map(|day| {
                let date = day.first()?.date;
                let cards = day
                    .into_iter()
                    .map(|e| view! { <EventCard event=e compact=true/> })
                    .collect_view();
                Some(view! {
                    <div class="calendar-day">
                        <h3><ClientDate date=date/></h3>
                        {cards}
                    </div>
                })
            })
            .collect_view(),
    }
}

fn events_view(events: Vec<Event>) -> impl IntoView {
    let projects = project_options(&events);
    let events = store_value(events);
    let mounted = use_mount_state();

    let (project, set_project) = create_signal(ALL.to_string());
    let (kind, set_kind) = create_signal(ALL.to_string());
    let (layout, set_layout) = create_signal(Layout::Grid);

    let filter = move || EventFilter {
        project_id: project.with(|p| p.parse().ok()),
        kind: kind.with(|k| EventKind::from_slug(k)),
    };
    // Splitting needs the client clock
    let schedule = create_memo(move |_| {
        mounted
            .get()
            .gate(|| events.with_value(|all| EventSchedule::split(all, Utc::now(), &filter())))
    });

    let project_select = projects
        .into_iter()
        .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
        .collect_view();
    let kind_select = EventKind::ALL
        .iter()
        .map(|k| view! { <option value=k.slug()>{k.label()}</option> })
        .collect_view();
    let layout_buttons = [Layout::Grid, Layout::List, Layout::Calendar]
        .into_iter()
        .map(|l| {
            let class = move || {
                if layout.get() == l {
                    "button toggle active"
                } else {
                    "button toggle"
                }
            };
            view! { <button class=class on:click=move |_| set_layout.set(l)>{l.label()}</button> }
        })
        .collect_view();

    let upcoming = move || match schedule.get() {
        None => view! { <p class="loading">"Loading events\u{2026}"</p> }.into_view(),
        Some(s) if s.upcoming.is_empty() => view! {
            <div class="card empty-state">
                <h3>"No Events Found"</h3>
                <p>"No upcoming events match the selected filters."</p>
            </div>
        }
        .into_view(),
        Some(s) => event_cards(s.upcoming, layout.get()),
    };
    let past = move || {
        schedule
            .get()
            .filter(|s| !s.past.is_empty())
            .map(|s| {
                view! {
                    <section class="past-events">
                        <h2>"Past Events"</h2>
                        {event_cards(s.past, Layout::List)}
                    </section>
                }
            })
    };

    view! {
        <main class="container events-page">
            <header class="page-header">
                <h1>"Sustainability Events"</h1>
                <p class="tagline">
                    "Workshops, meetups and activities organized by sustainability initiatives in Aachen."
                </p>
            </header>

            <div class="filter-bar">
                <label>
                    "Project"
                    <select on:change=move |ev| {
                        set_project.set(event_target_value(&ev));
                        report_once(Interaction::EventsFiltered);
                    }>
                        <option value=ALL>"All Projects"</option>
                        {project_select}
                    </select>
                </label>
                <label>
                    "Type"
                    <select on:change=move |ev| {
                        set_kind.set(event_target_value(&ev));
                        report_once(Interaction::EventsFiltered);
                    }>
                        <option value=ALL>"All Types"</option>
                        {kind_select}
                    </select>
                </label>
                <div class="layout-toggle">{layout_buttons}</div>
            </div>

            <section class="upcoming-events">
                <h2>"Upcoming Events"</h2>
                {upcoming}
            </section>
            {past}
        </main>
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    load_events().map(events_view).map_err(|e| {
        log::error!("Events page unavailable: {}", e);
        e
    })
}
