use super::calendar::{days_between_ceil, deserialize_calendar_date};
use crate::format::format_long_date;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RoundStatus {
    Active,
    Upcoming,
    Completed,
}

impl RoundStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RoundStatus::Active => "Active",
            RoundStatus::Upcoming => "Upcoming",
            RoundStatus::Completed => "Completed",
        }
    }

    /// CSS class for the status badge
    pub fn status_class(&self) -> &'static str {
        match self {
            RoundStatus::Active => "badge badge-active",
            RoundStatus::Upcoming => "badge badge-upcoming",
            RoundStatus::Completed => "badge badge-completed",
        }
    }
}

/// A quadratic funding round with its matching pool
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FundingRound {
    pub id: u32,
    pub title: String,
    pub status: RoundStatus,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub end_date: DateTime<Utc>,
    pub matching_pool: f64,
    pub projects: u32,
    pub contributors: u32,
    pub total_raised: f64,
    #[serde(default)]
    pub description: String,
}

impl FundingRound {
    /// Raised funds as a whole percentage of the matching pool, capped at 100.
    ///
    /// Returns 0 for a round without a positive pool.
    pub fn progress_percent(&self) -> u32 {
        if self.matching_pool <= 0.0 {
            return 0;
        }
        let pct = (self.total_raised / (self.matching_pool / 100.0)).round();
        pct.clamp(0.0, 100.0) as u32
    }

    pub fn days_until_end(&self, now: DateTime<Utc>) -> i64 {
        days_between_ceil(now, self.end_date)
    }

    pub fn days_until_start(&self, now: DateTime<Utc>) -> i64 {
        days_between_ceil(now, self.start_date)
    }

    pub fn duration_days(&self) -> i64 {
        days_between_ceil(self.start_date, self.end_date)
    }

    /// The day count shown in a round's summary tile.
    ///
    /// Active: days remaining. Upcoming: days until start. Completed: duration.
    pub fn headline_days(&self, now: DateTime<Utc>) -> i64 {
        match self.status {
            RoundStatus::Active => self.days_until_end(now),
            RoundStatus::Upcoming => self.days_until_start(now),
            RoundStatus::Completed => self.duration_days(),
        }
    }

    pub fn headline_days_label(&self) -> &'static str {
        match self.status {
            RoundStatus::Active => "Days Remaining",
            RoundStatus::Upcoming => "Starts In",
            RoundStatus::Completed => "Duration",
        }
    }

    /// One-line timing summary for compact cards
    pub fn timing_label(&self, now: DateTime<Utc>, locale: &str) -> String {
        match self.status {
            RoundStatus::Active => format!("{} days remaining", self.days_until_end(now)),
            RoundStatus::Upcoming => {
                format!("Starts on {}", format_long_date(self.start_date, locale))
            }
            RoundStatus::Completed => {
                format!("Ended on {}", format_long_date(self.end_date, locale))
            }
        }
    }

    /// Upcoming rounds have no raised funds to show
    pub fn shows_progress(&self) -> bool {
        self.status != RoundStatus::Upcoming
    }
}

/// Funding rounds grouped the way the governance page lists them.
#[derive(Debug, Clone, Default)]
pub struct RoundBoard {
    pub active: Option<FundingRound>,
    pub upcoming: Vec<FundingRound>,
    pub completed: Vec<FundingRound>,
}

impl RoundBoard {
    /// Group rounds by status, keeping data order. Only the first active
    /// round is featured.
    pub fn from_rounds(rounds: &[FundingRound]) -> Self {
        let active = rounds
            .iter()
            .find(|r| r.status == RoundStatus::Active)
            .cloned();
        let by_status = |status: RoundStatus| -> Vec<FundingRound> {
            rounds.iter().filter(|r| r.status == status).cloned().collect()
        };
        Self {
            active,
            upcoming: by_status(RoundStatus::Upcoming),
            completed: by_status(RoundStatus::Completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funding::calendar::parse_calendar_date;

    fn round(status: RoundStatus, pool: f64, raised: f64) -> FundingRound {
        FundingRound {
            id: 1,
            title: "Test Round".to_string(),
            status,
            start_date: parse_calendar_date("2025-03-01").unwrap(),
            end_date: parse_calendar_date("2025-03-31").unwrap(),
            matching_pool: pool,
            projects: 3,
            contributors: 40,
            total_raised: raised,
            description: String::new(),
        }
    }

    fn at(raw: &str) -> DateTime<Utc> {
        parse_calendar_date(raw).unwrap()
    }

    #[test]
    fn test_progress_rounds_to_nearest_percent() {
        // 8420.15 / 150 = 56.13
        assert_eq!(round(RoundStatus::Active, 15_000.0, 8_420.15).progress_percent(), 56);
        assert_eq!(round(RoundStatus::Active, 12_000.0, 7_865.40).progress_percent(), 66);
    }

    #[test]
    fn test_progress_capped_at_100() {
        assert_eq!(round(RoundStatus::Active, 1_000.0, 5_000.0).progress_percent(), 100);
    }

    #[test]
    fn test_progress_without_pool_is_zero() {
        assert_eq!(round(RoundStatus::Active, 0.0, 500.0).progress_percent(), 0);
    }

    #[test]
    fn test_headline_days_by_status() {
        let now = at("2025-03-10");
        assert_eq!(round(RoundStatus::Active, 1.0, 0.0).headline_days(now), 21);
        assert_eq!(round(RoundStatus::Upcoming, 1.0, 0.0).headline_days(at("2025-02-20")), 9);
        assert_eq!(round(RoundStatus::Completed, 1.0, 0.0).headline_days(now), 30);
    }

    #[test]
    fn test_days_remaining_goes_negative_after_end() {
        let r = round(RoundStatus::Active, 1.0, 0.0);
        assert!(r.days_until_end(at("2025-04-05")) < 0);
    }

    #[test]
    fn test_timing_label() {
        let now = at("2025-03-10");
        assert_eq!(
            round(RoundStatus::Active, 1.0, 0.0).timing_label(now, "en-US"),
            "21 days remaining"
        );
        assert_eq!(
            round(RoundStatus::Upcoming, 1.0, 0.0).timing_label(now, "de-DE"),
            "Starts on 1. März 2025"
        );
        assert_eq!(
            round(RoundStatus::Completed, 1.0, 0.0).timing_label(now, "en-US"),
            "Ended on March 31, 2025"
        );
    }

    #[test]
    fn test_upcoming_hides_progress() {
        assert!(!round(RoundStatus::Upcoming, 1.0, 0.0).shows_progress());
        assert!(round(RoundStatus::Completed, 1.0, 0.0).shows_progress());
    }

    #[test]
    fn test_board_groups_and_features_first_active() {
        let mut rounds = vec![
            round(RoundStatus::Completed, 1.0, 0.0),
            round(RoundStatus::Active, 1.0, 0.0),
            round(RoundStatus::Upcoming, 1.0, 0.0),
            round(RoundStatus::Active, 1.0, 0.0),
        ];
        for (i, r) in rounds.iter_mut().enumerate() {
            r.id = i as u32 + 1;
        }
        let board = RoundBoard::from_rounds(&rounds);
        assert_eq!(board.active.map(|r| r.id), Some(2));
        assert_eq!(board.upcoming.len(), 1);
        assert_eq!(board.completed.len(), 1);
    }

    #[test]
    fn test_board_without_active_round() {
        let board = RoundBoard::from_rounds(&[round(RoundStatus::Completed, 1.0, 0.0)]);
        assert!(board.active.is_none());
    }
}
