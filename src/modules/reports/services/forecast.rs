//! Moving-average revenue forecast.
//!
//! The prediction for every future day is the mean of the last (up to) seven daily
//! revenues. Bounds sit one population standard deviation either side of it, with the
//! lower bound floored at zero. The bounds are not rounded.

use chrono::{Duration, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};

use crate::core::aggregate::group_ordered;
use crate::core::rounding;
use crate::modules::reports::models::{ForecastDataPoint, PeriodRevenue, RevenueForecastResponse};
use crate::modules::transactions::models::TransactionRecord;

/// Days of history fetched behind "today"
pub const LOOKBACK_DAYS: u32 = 30;

/// Trailing daily revenues averaged into the prediction
pub const WINDOW_DAYS: usize = 7;

pub const DEFAULT_PERIODS: u32 = 7;

pub const METHOD: &str = "moving_average";

pub const CONFIDENCE: f64 = 0.75;

/// Daily revenue series with the calendar date of each day
fn daily_revenue(records: &[TransactionRecord]) -> Vec<(NaiveDate, PeriodRevenue)> {
    group_ordered(records, |record| record.txn_date)
        .into_iter()
        .map(|group| (group.key, PeriodRevenue::from(group)))
        .collect()
}

/// Mean and population standard deviation of `window`
///
/// The mean and the variance are rounded half-up to 2 places, the square root is not.
fn window_statistics(window: &[Decimal]) -> (Decimal, Decimal) {
    let size = window.len() as u64;
    let mean = rounding::average(window.iter().copied().sum(), size);

    let squared_deviations: Decimal = window
        .iter()
        .map(|revenue| {
            let deviation = *revenue - mean;
            deviation * deviation
        })
        .sum();
    let variance = rounding::average(squared_deviations, size);
    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);

    (mean, std_dev)
}

/// Forecast `periods` days past the last day in `history`
pub fn moving_average_forecast(
    history: &[(NaiveDate, Decimal)],
    periods: u32,
) -> Vec<ForecastDataPoint> {
    let last_date = match history.last() {
        Some((date, _)) => *date,
        None => return Vec::new(),
    };

    let window: Vec<Decimal> = history
        .iter()
        .skip(history.len().saturating_sub(WINDOW_DAYS))
        .map(|(_, revenue)| *revenue)
        .collect();
    let (mean, std_dev) = window_statistics(&window);

    let lower_bound = (mean - std_dev).max(Decimal::ZERO);
    let upper_bound = mean + std_dev;

    (1..=periods)
        .map(|offset| ForecastDataPoint {
            period: (last_date + Duration::days(i64::from(offset)))
                .format("%Y-%m-%d")
                .to_string(),
            predicted_revenue: mean,
            lower_bound,
            upper_bound,
        })
        .collect()
}

/// Forecast from the records of the lookback window
pub fn forecast_revenue(records: &[TransactionRecord], periods: u32) -> RevenueForecastResponse {
    let daily = daily_revenue(records);

    let series: Vec<(NaiveDate, Decimal)> = daily
        .iter()
        .map(|(date, period)| (*date, period.revenue))
        .collect();
    let forecast = moving_average_forecast(&series, periods);

    RevenueForecastResponse {
        forecast,
        historical_data: daily.into_iter().map(|(_, period)| period).collect(),
        method: METHOD.to_string(),
        confidence: CONFIDENCE,
    }
}
