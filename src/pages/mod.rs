mod events;
mod governance;
mod home;
mod learning;
mod not_found;
mod page_error;

pub use events::EventsPage;
pub use governance::GovernancePage;
pub use home::HomePage;
pub use learning::LearningPage;
pub use not_found::NotFoundPage;
pub use page_error::PageError;
