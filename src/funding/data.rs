use super::proposals::Proposal;
use super::rounds::FundingRound;
use crate::data::{parse_dataset, DataError};
use serde::Deserialize;

const GOVERNANCE_JSON: &str = include_str!("../../data/governance.json");

/// Static mock data behind the governance page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GovernanceData {
    #[serde(default)]
    pub proposals: Vec<Proposal>,
    #[serde(default)]
    pub funding_rounds: Vec<FundingRound>,
}

pub fn parse_governance_data(json: &str) -> Result<GovernanceData, DataError> {
    let data: GovernanceData = parse_dataset("governance", json)?;
    log::debug!(
        "Loaded {} proposals and {} funding rounds",
        data.proposals.len(),
        data.funding_rounds.len()
    );
    Ok(data)
}

/// Parse the governance data bundled into the binary.
pub fn load_governance_data() -> Result<GovernanceData, DataError> {
    parse_governance_data(GOVERNANCE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funding::{ProposalStatus, RoundBoard, RoundStatus};

    #[test]
    fn test_bundled_data_parses() {
        let data = load_governance_data().unwrap();
        assert_eq!(data.proposals.len(), 5);
        assert_eq!(data.funding_rounds.len(), 6);
    }

    #[test]
    fn test_bundled_rounds_mix_date_formats() {
        let data = load_governance_data().unwrap();
        let winter = &data.funding_rounds[2];
        assert_eq!(winter.duration_days(), 30);
        // 2024-10-01T00:00:00Z .. 2024-12-31T23:59:59Z is just under 92 days
        let q4 = &data.funding_rounds[5];
        assert_eq!(q4.duration_days(), 92);
    }

    #[test]
    fn test_bundled_board_features_first_active_round() {
        let data = load_governance_data().unwrap();
        let board = RoundBoard::from_rounds(&data.funding_rounds);
        let active = board.active.unwrap();
        assert_eq!(active.title, "Aachen Sustainability QF");
        assert_eq!(active.status, RoundStatus::Active);
        assert_eq!(board.upcoming.len(), 2);
        assert_eq!(board.completed.len(), 2);
    }

    #[test]
    fn test_bundled_proposal_statuses() {
        let data = load_governance_data().unwrap();
        let completed = data
            .proposals
            .iter()
            .filter(|p| p.status == ProposalStatus::Completed)
            .count();
        assert_eq!(completed, 2);
    }

    #[test]
    fn test_malformed_data_is_an_error() {
        let err = parse_governance_data(r#"{ "proposals": 3 }"#).unwrap_err();
        assert!(err.to_string().starts_with("malformed governance data"));
    }

    #[test]
    fn test_bad_date_is_an_error() {
        let json = r#"{ "funding_rounds": [{
            "id": 1, "title": "X", "status": "Active",
            "start_date": "soon", "end_date": "2025-01-01",
            "matching_pool": 1, "projects": 0, "contributors": 0, "total_raised": 0
        }] }"#;
        assert!(parse_governance_data(json).is_err());
    }

    #[test]
    fn test_empty_document_gives_empty_data() {
        let data = parse_governance_data("{}").unwrap();
        assert!(data.proposals.is_empty());
        assert!(data.funding_rounds.is_empty());
    }
}
