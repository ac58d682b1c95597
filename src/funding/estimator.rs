use super::matching::{calculate_matching, ContributionInput, FundingError, MatchingResult};

/// Recompute lifecycle. `Updating` only exists for the duration of a setter
/// call, so any observer outside of one sees `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstimatorPhase {
    #[default]
    Idle,
    Updating,
}

/// Holds the two estimator inputs and the result derived from them.
///
/// Values are taken as given. Range limits belong to the sliders; an
/// out-of-domain value produces an error result instead of being clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimator {
    amount: f64,
    contributor_count: u32,
    phase: EstimatorPhase,
    result: Result<MatchingResult, FundingError>,
}

impl Estimator {
    pub fn new(amount: f64, contributor_count: u32) -> Self {
        let input = ContributionInput::new(amount, contributor_count);
        Self {
            amount,
            contributor_count,
            phase: EstimatorPhase::Idle,
            result: calculate_matching(&input),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn contributor_count(&self) -> u32 {
        self.contributor_count
    }

    pub fn phase(&self) -> EstimatorPhase {
        self.phase
    }

    pub fn input(&self) -> ContributionInput {
        ContributionInput::new(self.amount, self.contributor_count)
    }

    /// Result of the last recompute
    pub fn result(&self) -> &Result<MatchingResult, FundingError> {
        &self.result
    }

    pub fn set_amount(&mut self, amount: f64) -> &Result<MatchingResult, FundingError> {
        self.phase = EstimatorPhase::Updating;
        self.amount = amount;
        self.recompute()
    }

    pub fn set_contributor_count(&mut self, count: u32) -> &Result<MatchingResult, FundingError> {
        self.phase = EstimatorPhase::Updating;
        self.contributor_count = count;
        self.recompute()
    }

    fn recompute(&mut self) -> &Result<MatchingResult, FundingError> {
        self.result = calculate_matching(&self.input());
        if let Err(e) = &self.result {
            log::warn!("Estimator rejected input: {}", e);
        }
        self.phase = EstimatorPhase::Idle;
        &self.result
    }
}
