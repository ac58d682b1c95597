use thiserror::Error;

/// Rejected estimator input. Both variants are invalid-input failures; the
/// calculator never coerces a bad value into range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FundingError {
    #[error("contribution amount must be a positive, finite number (got {0})")]
    InvalidAmount(f64),
    #[error("contributor count must be at least 1 (got {0})")]
    InvalidContributorCount(u32),
}

/// A single uniform contribution made by `contributor_count` people.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionInput {
    /// Amount each contributor gives, in currency units
    pub amount: f64,
    pub contributor_count: u32,
}

impl ContributionInput {
    pub fn new(amount: f64, contributor_count: u32) -> Self {
        Self {
            amount,
            contributor_count,
        }
    }

    /// Check the input domain: `amount > 0` (finite) and `contributor_count >= 1`.
    pub fn validate(&self) -> Result<(), FundingError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(FundingError::InvalidAmount(self.amount));
        }
        if self.contributor_count < 1 {
            return Err(FundingError::InvalidContributorCount(self.contributor_count));
        }
        Ok(())
    }
}

/// Matching figures derived from one [`ContributionInput`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingResult {
    /// 1:1 match of a single contribution
    pub traditional_match: f64,
    /// `(√n·√c)² − n·c`; floating-point noise around zero for uniform amounts
    pub quadratic_match: f64,
    pub total_contribution: f64,
    /// One contribution plus its share of the quadratic match
    pub per_contributor_share: f64,
}

/// Compute traditional and quadratic matching for a uniform contribution.
///
/// The quadratic term is evaluated as `(√n · √c)² − n·c` with separate square
/// roots, exactly as displayed in the explainer. With every contributor giving
/// the same amount the match collapses to zero, so the returned value is only
/// the rounding residue of the sqrt/square round trip. It is deliberately not
/// simplified.
///
/// # Errors
///
/// Returns [`FundingError`] if the amount is not a positive finite number, if
/// the total contribution overflows, or if the contributor count is zero. No
/// partial result is produced.
pub fn calculate_matching(input: &ContributionInput) -> Result<MatchingResult, FundingError> {
    input.validate()?;

    let n = f64::from(input.contributor_count);
    let c = input.amount;

    let total_contribution = c * n;
    if !total_contribution.is_finite() {
        return Err(FundingError::InvalidAmount(c));
    }
    let traditional_match = c;
    let quadratic_match = (n.sqrt() * c.sqrt()).powi(2) - total_contribution;
    // Squaring can still overflow when the total sits right at f64::MAX
    if !quadratic_match.is_finite() {
        return Err(FundingError::InvalidAmount(c));
    }
    // n >= 1 after validation, so the division below cannot hit zero
    let per_contributor_share = c + quadratic_match / n;

    Ok(MatchingResult {
        traditional_match,
        quadratic_match,
        total_contribution,
        per_contributor_share,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(amount: f64, count: u32) -> MatchingResult {
        calculate_matching(&ContributionInput::new(amount, count)).unwrap()
    }

    #[test]
    fn test_default_slider_position() {
        let r = calc(10.0, 20);
        assert_eq!(r.total_contribution, 200.0);
        assert_eq!(r.traditional_match, 10.0);
        assert!(r.quadratic_match.abs() < 1e-9, "got {}", r.quadratic_match);
        assert!((r.per_contributor_share - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_minimum_slider_position() {
        let r = calc(1.0, 1);
        assert_eq!(r.total_contribution, 1.0);
        assert_eq!(r.traditional_match, 1.0);
        assert!(r.quadratic_match.abs() < 1e-9);
        assert!((r.per_contributor_share - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_maximum_slider_position() {
        let r = calc(100.0, 100);
        assert_eq!(r.total_contribution, 10_000.0);
        assert_eq!(r.traditional_match, 100.0);
        assert!(r.quadratic_match.abs() < 1e-9);
        assert!((r.per_contributor_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_contributor_share_is_amount() {
        for amount in [0.5, 3.0, 42.0, 99.0] {
            let r = calc(amount, 1);
            assert!(r.quadratic_match.abs() < 1e-9);
            assert!((r.per_contributor_share - amount).abs() < 1e-9);
        }
    }

    #[test]
    fn test_traditional_match_ignores_contributor_count() {
        assert_eq!(calc(25.0, 1).traditional_match, calc(25.0, 80).traditional_match);
    }

    #[test]
    fn test_amount_below_ui_minimum_is_accepted() {
        let r = calc(0.25, 4);
        assert_eq!(r.total_contribution, 1.0);
    }

    #[test]
    fn test_share_uses_quadratic_residue() {
        let r = calc(7.0, 13);
        let expected = 7.0 + r.quadratic_match / 13.0;
        assert_eq!(r.per_contributor_share, expected);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let err = calculate_matching(&ContributionInput::new(0.0, 10)).unwrap_err();
        assert_eq!(err, FundingError::InvalidAmount(0.0));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = calculate_matching(&ContributionInput::new(-5.0, 10)).unwrap_err();
        assert!(matches!(err, FundingError::InvalidAmount(_)));
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        for amount in [f64::NAN, f64::INFINITY] {
            let result = calculate_matching(&ContributionInput::new(amount, 3));
            assert!(matches!(result, Err(FundingError::InvalidAmount(_))));
        }
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let result = calculate_matching(&ContributionInput::new(1e308, 100));
        assert_eq!(result, Err(FundingError::InvalidAmount(1e308)));
    }

    #[test]
    fn test_huge_finite_total_stays_finite() {
        let r = calc(1e300, 10);
        assert!(r.total_contribution.is_finite());
        assert!(r.quadratic_match.is_finite());
        assert!(r.per_contributor_share.is_finite());
    }

    #[test]
    fn test_zero_contributors_rejected() {
        let err = calculate_matching(&ContributionInput::new(10.0, 0)).unwrap_err();
        assert_eq!(err, FundingError::InvalidContributorCount(0));
    }

    #[test]
    fn test_error_messages_name_the_bad_value() {
        assert_eq!(
            FundingError::InvalidContributorCount(0).to_string(),
            "contributor count must be at least 1 (got 0)"
        );
        assert!(FundingError::InvalidAmount(-1.0).to_string().contains("-1"));
    }
}
