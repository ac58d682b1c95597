mod calendar;
mod data;
mod estimator;
mod matching;
mod proposals;
mod rounds;

pub(crate) use calendar::deserialize_calendar_date;
pub use calendar::{days_between_ceil, parse_calendar_date};
pub use data::{load_governance_data, parse_governance_data, GovernanceData};
pub use estimator::{Estimator, EstimatorPhase};
pub use matching::{calculate_matching, ContributionInput, FundingError, MatchingResult};
pub use proposals::{
    proposals_with_status, GovernanceStats, Implementation, Proposal, ProposalResult,
    ProposalStatus, VoteTally,
};
pub use rounds::{FundingRound, RoundBoard, RoundStatus};
