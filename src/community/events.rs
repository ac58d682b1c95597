use crate::funding::deserialize_calendar_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    InPerson,
    Virtual,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::InPerson, EventKind::Virtual];

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::InPerson => "In-Person",
            EventKind::Virtual => "Virtual",
        }
    }

    /// Value used in the filter `<select>`
    pub fn slug(&self) -> &'static str {
        match self {
            EventKind::InPerson => "in-person",
            EventKind::Virtual => "virtual",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            EventKind::InPerson => "badge badge-green",
            EventKind::Virtual => "badge badge-blue",
        }
    }
}

/// A community event run by one of the listed projects
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: DateTime<Utc>,
    /// Free-form time span, e.g. "09:00-14:00"
    pub time: String,
    pub location: String,
    pub kind: EventKind,
    #[serde(default)]
    pub description: String,
    pub project_id: u32,
    pub project: String,
    #[serde(default)]
    pub attendees: u32,
}

impl Event {
    /// Events on or after `now` are upcoming.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date >= now
    }
}

/// Project and kind restrictions; `None` lets everything through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub project_id: Option<u32>,
    pub kind: Option<EventKind>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.project_id.map_or(true, |id| event.project_id == id)
            && self.kind.map_or(true, |kind| event.kind == kind)
    }
}

/// Events split around a point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSchedule {
    /// Soonest first, restricted by the filter
    pub upcoming: Vec<Event>,
    /// Most recent first, unfiltered
    pub past: Vec<Event>,
}

impl EventSchedule {
    pub fn split(events: &[Event], now: DateTime<Utc>, filter: &EventFilter) -> Self {
        let (mut upcoming, mut past): (Vec<Event>, Vec<Event>) =
            events.iter().cloned().partition(|e| e.is_upcoming(now));
        upcoming.retain(|e| filter.matches(e));
        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        past.sort_by(|a, b| b.date.cmp(&a.date));
        Self { upcoming, past }
    }
}

/// Distinct `(project_id, project)` pairs, ordered by id
pub fn project_options(events: &[Event]) -> Vec<(u32, String)> {
    let projects: BTreeMap<u32, &str> = events
        .iter()
        .map(|e| (e.project_id, e.project.as_str()))
        .collect();
    projects
        .into_iter()
        .map(|(id, name)| (id, name.to_string()))
        .collect()
}

/// Calendar view: events grouped by day, days ascending, data order within a day
pub fn events_by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut days: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
    for event in events {
        days.entry(event.date.date_naive())
            .or_default()
            .push(event.clone());
    }
    days
}
