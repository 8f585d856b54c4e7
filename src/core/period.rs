use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// Time bucket granularity for period-grouped reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    #[default]
    Day,
    /// Bucketed on the Monday of the ISO week
    Week,
    /// Bucketed on the first day of the month
    Month,
}

impl GroupBy {
    /// Parse a caller-supplied mode (`day`, `week` or `month`).
    /// Unrecognized values fall back to [`GroupBy::Day`].
    pub fn parse(mode: &str) -> Self {
        match mode.trim().to_lowercase().as_str() {
            "week" => GroupBy::Week,
            "month" => GroupBy::Month,
            _ => GroupBy::Day,
        }
    }

    /// Like [`GroupBy::parse`] but also accepts `daily`, `weekly` and `monthly`.
    /// Only the revenue-by-period report takes the longer forms.
    pub fn parse_period(mode: &str) -> Self {
        match mode.trim().to_lowercase().as_str() {
            "week" | "weekly" => GroupBy::Week,
            "month" | "monthly" => GroupBy::Month,
            _ => GroupBy::Day,
        }
    }

    /// First date of the bucket containing `date`
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            GroupBy::Day => date,
            GroupBy::Week => {
                date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
            }
            GroupBy::Month => date.with_day(1).unwrap_or(date),
        }
    }

    /// Bucket key (`YYYY-MM-DD`) of the bucket containing `date`
    pub fn bucket_key(&self, date: NaiveDate) -> String {
        format_date(self.bucket_start(date))
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupBy::Day => write!(f, "day"),
            GroupBy::Week => write!(f, "week"),
            GroupBy::Month => write!(f, "month"),
        }
    }
}

/// Bucket key for a date under a raw `groupBy` string
pub fn bucket_key(date: NaiveDate, group_by: &str) -> String {
    GroupBy::parse(group_by).bucket_key(date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
