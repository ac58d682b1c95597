use super::calendar::deserialize_calendar_date;
use super::rounds::FundingRound;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProposalStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProposalResult {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Implementation {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Scheduled,
    Completed,
}

impl Implementation {
    pub fn label(&self) -> &'static str {
        match self {
            Implementation::NotStarted => "Not Started",
            Implementation::InProgress => "In Progress",
            Implementation::Scheduled => "Scheduled",
            Implementation::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct VoteTally {
    #[serde(rename = "for")]
    pub in_favor: u32,
    pub against: u32,
    pub abstain: u32,
}

impl VoteTally {
    /// Sum of all votes, widened so three full `u32` counts cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.in_favor) + u64::from(self.against) + u64::from(self.abstain)
    }

    /// Share of votes in favor as a whole percentage; 0 with no votes.
    pub fn approval_percent(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (f64::from(self.in_favor) / total as f64 * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Proposal {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: ProposalStatus,
    pub creator: String,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date_created: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub voting_ends: DateTime<Utc>,
    pub votes: VoteTally,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub result: Option<ProposalResult>,
    #[serde(default)]
    pub implementation: Option<Implementation>,
}

impl Proposal {
    /// CSS class for the category badge
    pub fn category_class(&self) -> &'static str {
        match self.category.as_str() {
            "System Improvement" => "badge badge-blue",
            "Strategic" => "badge badge-purple",
            "Partnership" => "badge badge-green",
            "Engagement" => "badge badge-yellow",
            "Incentives" => "badge badge-orange",
            _ => "badge badge-neutral",
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == ProposalStatus::Completed && self.result == Some(ProposalResult::Approved)
    }
}

/// Proposals with `status`, in data order
pub fn proposals_with_status(proposals: &[Proposal], status: ProposalStatus) -> Vec<Proposal> {
    proposals
        .iter()
        .filter(|p| p.status == status)
        .cloned()
        .collect()
}

/// Headline counters for the governance page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GovernanceStats {
    pub total_proposals: usize,
    pub active_proposals: usize,
    pub funding_rounds: usize,
    pub implemented_proposals: usize,
}

impl GovernanceStats {
    pub fn collect(proposals: &[Proposal], rounds: &[FundingRound]) -> Self {
        Self {
            total_proposals: proposals.len(),
            active_proposals: proposals
                .iter()
                .filter(|p| p.status == ProposalStatus::Active)
                .count(),
            funding_rounds: rounds.len(),
            implemented_proposals: proposals.iter().filter(|p| p.is_approved()).count(),
        }
    }
}
