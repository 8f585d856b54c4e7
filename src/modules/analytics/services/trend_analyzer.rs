use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::core::aggregate::group_ordered;
use crate::core::{period, rounding};
use crate::modules::analytics::models::{
    HeatmapCell, PeakTimesResponse, TrendDataPoint, TrendDirection, TrendsResponse,
};
use crate::modules::transactions::models::TransactionRecord;

/// Daily average-amount trend
///
/// Always buckets by calendar day. Direction compares the first and the last day.
pub fn trends(records: &[TransactionRecord]) -> TrendsResponse {
    let mut points: Vec<TrendDataPoint> = Vec::new();
    let mut previous_average: Option<Decimal> = None;

    for group in group_ordered(records, |record| record.txn_date) {
        let average_amount = group.average_amount();
        let change_percentage = previous_average
            .and_then(|previous| rounding::change_percentage(average_amount, previous));

        points.push(TrendDataPoint {
            period: period::format_date(group.key),
            average_amount,
            transaction_count: group.count(),
            change_percentage,
        });
        previous_average = Some(average_amount);
    }

    let (trend_direction, overall_change_percentage) = overall_trend(&points);

    TrendsResponse {
        trends: points,
        trend_direction,
        overall_change_percentage,
    }
}

fn overall_trend(points: &[TrendDataPoint]) -> (TrendDirection, Option<f64>) {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => (first.average_amount, last.average_amount),
        _ => return (TrendDirection::Stable, None),
    };

    if last == first {
        return (TrendDirection::Stable, Some(0.0));
    }

    let direction = if last > first {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    // A zero first-day average has no defined relative change
    (direction, rounding::change_percentage(last, first))
}

/// Hour by day-of-week transaction heatmap
///
/// Records without a timestamp are skipped. Days are numbered from Sunday = 0 and hours
/// are taken in UTC. The busiest cell is the first one to reach the maximum count.
pub fn peak_times(records: &[TransactionRecord]) -> PeakTimesResponse {
    let mut index: HashMap<(u32, u32), usize> = HashMap::new();
    let mut cells: Vec<HeatmapCell> = Vec::new();

    for timestamp in records.iter().filter_map(|record| record.txn_timestamp) {
        let hour = timestamp.hour();
        let day_of_week = timestamp.weekday().number_from_monday() % 7;

        match index.get(&(hour, day_of_week)) {
            Some(&position) => cells[position].transaction_count += 1,
            None => {
                index.insert((hour, day_of_week), cells.len());
                cells.push(HeatmapCell {
                    hour,
                    day_of_week,
                    transaction_count: 1,
                });
            }
        }
    }

    let mut busiest: Option<HeatmapCell> = None;
    for cell in &cells {
        if busiest.map_or(true, |best| cell.transaction_count > best.transaction_count) {
            busiest = Some(*cell);
        }
    }

    PeakTimesResponse {
        heatmap_data: cells,
        busiest_hour: busiest.map(|cell| cell.hour),
        busiest_day: busiest.map(|cell| cell.day_of_week),
        peak_transaction_count: busiest.map(|cell| cell.transaction_count),
    }
}
