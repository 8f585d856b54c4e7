use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

use crate::core::{AppError, Clock, Result};

/// Default lookback when a caller omits the date range
pub const DEFAULT_RANGE_DAYS: u32 = 30;

/// Inclusive calendar date range handed to every report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AppError::validation(format!(
                "startDate ({}) must be before or equal to endDate ({})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The `days` days leading up to and including `today`
    pub fn trailing(today: NaiveDate, days: u32) -> Self {
        Self {
            start: today - Duration::days(i64::from(days)),
            end: today,
        }
    }

    /// Resolve optional query bounds, defaulting each missing side from `today`
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
        default_days: u32,
    ) -> Result<Self> {
        let fallback = Self::trailing(today, default_days);
        let start = match start {
            Some(raw) => parse_date("startDate", raw)?,
            None => fallback.start,
        };
        let end = match end {
            Some(raw) => parse_date("endDate", raw)?,
            None => fallback.end,
        };
        Self::new(start, end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Parse a `YYYY-MM-DD` query value
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!(
            "Invalid {} format: '{}'. Expected YYYY-MM-DD",
            field, raw
        ))
    })
}

/// `startDate`/`endDate` query parameters shared by every report endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Resolves caller-supplied bounds against the injected clock
#[derive(Clone)]
pub struct RangeResolver {
    clock: Arc<dyn Clock>,
    default_days: u32,
}

impl RangeResolver {
    pub fn new(clock: Arc<dyn Clock>, default_days: u32) -> Self {
        Self {
            clock,
            default_days,
        }
    }

    pub fn resolve(&self, query: &DateRangeQuery) -> Result<DateRange> {
        DateRange::resolve(
            query.start_date.as_deref(),
            query.end_date.as_deref(),
            self.clock.today(),
            self.default_days,
        )
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}
