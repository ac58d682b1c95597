use super::events::Event;
use super::learning::LearningResource;
use crate::data::{parse_dataset, DataError};
use serde::Deserialize;

const EVENTS_JSON: &str = include_str!("../../data/events.json");
const LEARNING_JSON: &str = include_str!("../../data/learning.json");

#[derive(Debug, Clone, Default, Deserialize)]
struct EventsDocument {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LearningDocument {
    #[serde(default)]
    resources: Vec<LearningResource>,
}

pub fn parse_events(json: &str) -> Result<Vec<Event>, DataError> {
    let doc: EventsDocument = parse_dataset("events", json)?;
    log::debug!("Loaded {} events", doc.events.len());
    Ok(doc.events)
}

pub fn parse_learning_resources(json: &str) -> Result<Vec<LearningResource>, DataError> {
    let doc: LearningDocument = parse_dataset("learning", json)?;
    log::debug!("Loaded {} learning resources", doc.resources.len());
    Ok(doc.resources)
}

/// Events bundled into the binary
pub fn load_events() -> Result<Vec<Event>, DataError> {
    parse_events(EVENTS_JSON)
}

/// Learning resources bundled into the binary
pub fn load_learning_resources() -> Result<Vec<LearningResource>, DataError> {
    parse_learning_resources(LEARNING_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::{
        most_completed, top_rated, topics, EventFilter, EventKind, EventSchedule,
    };
    use crate::funding::parse_calendar_date;

    #[test]
    fn test_bundled_events_parse() {
        let events = load_events().unwrap();
        assert_eq!(events.len(), 8);
        let virtual_count = events
            .iter()
            .filter(|e| e.kind == EventKind::Virtual)
            .count();
        assert_eq!(virtual_count, 1);
    }

    #[test]
    fn test_bundled_schedule_mid_march() {
        let events = load_events().unwrap();
        let now = parse_calendar_date("2025-03-15").unwrap();
        let schedule = EventSchedule::split(&events, now, &EventFilter::default());
        let upcoming: Vec<u32> = schedule.upcoming.iter().map(|e| e.id).collect();
        let past: Vec<u32> = schedule.past.iter().map(|e| e.id).collect();
        assert_eq!(upcoming, vec![4, 2, 5, 8, 6]);
        assert_eq!(past, vec![7, 1, 3]);
    }

    #[test]
    fn test_bundled_resources_rankings() {
        let resources = load_learning_resources().unwrap();
        assert_eq!(resources.len(), 8);
        let popular: Vec<u32> = most_completed(&resources, 3).iter().map(|r| r.id).collect();
        assert_eq!(popular, vec![1, 6, 2]);
        let rated: Vec<u32> = top_rated(&resources, 3).iter().map(|r| r.id).collect();
        assert_eq!(rated, vec![6, 1, 2]);
        assert!(topics(&resources).contains(&"Local Context".to_string()));
    }

    #[test]
    fn test_malformed_events_name_the_dataset() {
        let err = parse_events(r#"{ "events": {} }"#).unwrap_err();
        assert!(err.to_string().starts_with("malformed events data"));
    }

    #[test]
    fn test_unknown_level_is_an_error() {
        let json = r#"{ "resources": [{
            "id": 1, "title": "T", "category": "Course", "creator": "C",
            "duration": "1 hour", "level": "Expert"
        }] }"#;
        assert!(parse_learning_resources(json).is_err());
    }

    #[test]
    fn test_empty_documents() {
        assert!(parse_events("{}").unwrap().is_empty());
        assert!(parse_learning_resources("{}").unwrap().is_empty());
    }
}
