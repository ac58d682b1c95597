mod client_date;
mod error_list;
mod event_card;
mod funding_round_card;
mod impact_metric;
mod nav_bar;
mod proposal_card;
mod quadratic_funding_explainer;
mod resource_card;

pub use client_date::ClientDate;
pub use error_list::ErrorList;
pub use event_card::EventCard;
pub use funding_round_card::FundingRoundCard;
pub use impact_metric::ImpactMetric;
pub use nav_bar::NavBar;
pub use proposal_card::ProposalCard;
pub use quadratic_funding_explainer::QuadraticFundingExplainer;
pub use resource_card::ResourceCard;
