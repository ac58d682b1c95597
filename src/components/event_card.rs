use crate::community::Event;
use crate::components::ClientDate;
use leptos::*;

#[component]
pub fn EventCard(
    event: Event,
    /// List row without the description
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let kind = event.kind;
    let description = (!compact).then(|| view! { <p class="event-description">{event.description}</p> });

    let class = if compact { "card event-card compact" } else { "card event-card" };

    view! {
        <div class=class>
            <div class="card-header">
                <h3>{event.title}</h3>
                <span class=kind.badge_class()>{kind.label()}</span>
            </div>
            <p class="event-when">
                <ClientDate date=event.date/>
                <span class="separator">"\u{2022}"</span>
                {event.time}
            </p>
            <p class="event-where">{event.location}</p>
            {description}
            <div class="event-meta">
                <span>"By " {event.project}</span>
                <span class="separator">"\u{2022}"</span>
                <span>{format!("{} attending", event.attendees)}</span>
            </div>
        </div>
    }
}
