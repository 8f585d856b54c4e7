// Property tests for period bucketing and the volume/revenue rollups built on it
//
// - Day buckets are the date itself
// - Week buckets start on the Monday of the ISO week
// - Month buckets start on the first of the month
// - Rollups neither drop nor invent records or revenue

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use payinsight::analytics::services::volume_analyzer;
use payinsight::core::period::bucket_key;
use payinsight::core::{DateRange, GroupBy};
use payinsight::reports::services::revenue_analyzer;
use payinsight::transactions::TransactionRecord;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..1_000).prop_map(|offset| epoch() + Duration::days(offset))
}

fn records_strategy() -> impl Strategy<Value = Vec<TransactionRecord>> {
    prop::collection::vec((0i64..400, 0i64..10_000_000, 0usize..3), 0..60).prop_map(|rows| {
        rows.into_iter()
            .map(|(offset, cents, merchant)| {
                TransactionRecord::new(
                    format!("MCH-{:05}", merchant),
                    Decimal::new(cents, 2),
                    "completed",
                    "VISA",
                    epoch() + Duration::days(offset),
                )
            })
            .collect()
    })
}

fn full_range() -> DateRange {
    DateRange::new(epoch(), epoch() + Duration::days(400)).unwrap()
}

proptest! {
    #[test]
    fn test_day_bucket_is_identity(date in date_strategy()) {
        prop_assert_eq!(GroupBy::Day.bucket_start(date), date);
        prop_assert_eq!(bucket_key(date, "day"), date.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_week_bucket_is_monday_on_or_before(date in date_strategy()) {
        let start = GroupBy::Week.bucket_start(date);

        prop_assert_eq!(start.weekday(), Weekday::Mon);
        prop_assert!(start <= date);
        prop_assert!(date - start < Duration::days(7));
        prop_assert_eq!(start.iso_week(), date.iso_week());
    }

    #[test]
    fn test_month_bucket_is_first_of_month(date in date_strategy()) {
        let start = GroupBy::Month.bucket_start(date);

        prop_assert_eq!(start.day(), 1);
        prop_assert_eq!(start.month(), date.month());
        prop_assert_eq!(start.year(), date.year());
    }

    #[test]
    fn test_unknown_modes_bucket_by_day(date in date_strategy(), mode in "[a-z]{1,8}") {
        prop_assume!(!matches!(mode.as_str(), "week" | "month"));
        prop_assert_eq!(bucket_key(date, &mode), bucket_key(date, "day"));
    }

    #[test]
    fn test_period_long_forms_match_short_forms(
        date in date_strategy(),
        (long, short) in prop::sample::select(vec![("daily", "day"), ("weekly", "week"), ("monthly", "month")]),
    ) {
        prop_assert_eq!(GroupBy::parse_period(long), GroupBy::parse(short));
        prop_assert_eq!(
            GroupBy::parse_period(long).bucket_key(date),
            bucket_key(date, short)
        );
    }

    #[test]
    fn test_volume_conserves_records(
        records in records_strategy(),
        mode in prop::sample::select(vec!["day", "week", "month"]),
    ) {
        let response = volume_analyzer::transaction_volume(&records, mode, full_range());

        let count: u64 = response.data.iter().map(|point| point.transaction_count).sum();
        let total: Decimal = response.data.iter().map(|point| point.total_amount).sum();
        let expected: Decimal = records.iter().map(|record| record.amount).sum();

        prop_assert_eq!(count, records.len() as u64);
        prop_assert_eq!(total, expected);
        prop_assert_eq!(response.group_by.as_str(), mode);
    }

    #[test]
    fn test_period_keys_are_unique(
        records in records_strategy(),
        mode in prop::sample::select(vec!["daily", "weekly", "monthly"]),
    ) {
        let response = revenue_analyzer::revenue_by_period(&records, mode);

        let mut keys: Vec<&str> = response.periods.iter().map(|p| p.period.as_str()).collect();
        let before = keys.len();
        keys.sort_unstable();
        keys.dedup();
        prop_assert_eq!(keys.len(), before);

        let expected: Decimal = records.iter().map(|record| record.amount).sum();
        prop_assert_eq!(response.total_revenue, expected);
        prop_assert_eq!(response.total_transactions, records.len() as u64);
    }

    #[test]
    fn test_coarser_buckets_never_add_periods(records in records_strategy()) {
        let days = revenue_analyzer::revenue_by_period(&records, "day").periods.len();
        let weeks = revenue_analyzer::revenue_by_period(&records, "week").periods.len();
        let months = revenue_analyzer::revenue_by_period(&records, "month").periods.len();

        prop_assert!(weeks <= days);
        prop_assert!(months <= days);
    }
}
