use std::collections::BTreeMap;

use crate::core::aggregate::group_ordered;
use crate::core::{rounding, DateRange, GroupBy};
use crate::modules::analytics::models::{
    SuccessRateResponse, VolumeAnalyticsResponse, VolumeDataPoint,
};
use crate::modules::transactions::models::{TransactionRecord, TransactionStatus};

/// Per-period transaction counts, totals and averages
///
/// `group_by` is one of `day`, `week` or `month`; anything else (including `weekly`)
/// buckets by day. The raw value is echoed back as given.
pub fn transaction_volume(
    records: &[TransactionRecord],
    group_by: &str,
    range: DateRange,
) -> VolumeAnalyticsResponse {
    let mode = GroupBy::parse(group_by);

    let data = group_ordered(records, |record| mode.bucket_key(record.txn_date))
        .into_iter()
        .map(|group| VolumeDataPoint {
            transaction_count: group.count(),
            total_amount: group.total_amount(),
            average_amount: group.average_amount(),
            period: group.key,
        })
        .collect();

    VolumeAnalyticsResponse {
        data,
        group_by: group_by.to_string(),
        date_range: range.to_string(),
    }
}

/// Status counters and success rate
///
/// Records with a status outside the four recognized values still count toward
/// `total_transactions` and `status_breakdown`.
pub fn success_rate(records: &[TransactionRecord]) -> SuccessRateResponse {
    let mut response = SuccessRateResponse {
        total_transactions: records.len() as u64,
        ..SuccessRateResponse::default()
    };
    let mut breakdown: BTreeMap<String, u64> = BTreeMap::new();

    for record in records {
        *breakdown.entry(record.status.clone()).or_insert(0) += 1;

        match record.recognized_status() {
            Some(TransactionStatus::Completed) => response.completed_count += 1,
            Some(TransactionStatus::Pending) => response.pending_count += 1,
            Some(TransactionStatus::Failed) => response.failed_count += 1,
            Some(TransactionStatus::Reversed) => response.reversed_count += 1,
            None => {}
        }
    }

    response.success_rate =
        rounding::count_percentage(response.completed_count, response.total_transactions);
    response.status_breakdown = breakdown;
    response
}
