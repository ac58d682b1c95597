mod data;
mod events;
mod learning;

pub use data::{load_events, load_learning_resources, parse_events, parse_learning_resources};
pub use events::{events_by_date, project_options, Event, EventFilter, EventKind, EventSchedule};
pub use learning::{
    most_completed, top_rated, topics, LearningResource, Level, ResourceCategory, ResourceFilter,
};
