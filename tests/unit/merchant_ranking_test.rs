// Property tests for merchant ranking and the revenue forecast
//
// - Rankings are sorted by descending revenue with consecutive ranks from 1
// - Rankings never exceed the effective limit
// - Forecast bounds bracket the prediction and never go negative

use chrono::{Duration, NaiveDate};
use payinsight::reports::services::forecast::{moving_average_forecast, WINDOW_DAYS};
use payinsight::reports::services::revenue_analyzer::{
    effective_limit, rank_merchants, DEFAULT_MERCHANT_LIMIT,
};
use payinsight::transactions::TransactionRecord;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn records_strategy() -> impl Strategy<Value = Vec<TransactionRecord>> {
    prop::collection::vec((0usize..15, 0i64..5_000_000), 0..80).prop_map(|rows| {
        rows.into_iter()
            .map(|(merchant, cents)| {
                TransactionRecord::new(
                    format!("MCH-{:05}", merchant),
                    Decimal::new(cents, 2),
                    "completed",
                    "VISA",
                    NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                )
            })
            .collect()
    })
}

fn series_strategy() -> impl Strategy<Value = Vec<(NaiveDate, Decimal)>> {
    prop::collection::vec(0i64..100_000_000, 1..40).prop_map(|revenues| {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        revenues
            .into_iter()
            .enumerate()
            .map(|(i, cents)| (start + Duration::days(i as i64), Decimal::new(cents, 2)))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_ranking_is_descending_and_consecutive(
        records in records_strategy(),
        limit in 1usize..20,
    ) {
        let ranked = rank_merchants(&records, limit);

        prop_assert!(ranked.len() <= limit);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].revenue >= pair[1].revenue);
        }
        for (position, merchant) in ranked.iter().enumerate() {
            prop_assert_eq!(merchant.rank as usize, position + 1);
        }
    }

    #[test]
    fn test_shares_of_returned_set_sum_to_hundred(records in records_strategy(), limit in 1usize..20) {
        let ranked = rank_merchants(&records, limit);
        let total: Decimal = ranked.iter().map(|merchant| merchant.revenue).sum();
        prop_assume!(total > Decimal::ZERO);

        let sum: f64 = ranked.iter().map(|merchant| merchant.percentage_of_total).sum();
        // Each ratio is rounded to 4 places before scaling
        let tolerance = 0.005 * ranked.len() as f64 + 1e-9;
        prop_assert!((sum - 100.0).abs() <= tolerance, "shares sum to {}", sum);
    }

    #[test]
    fn test_effective_limit(limit in any::<i64>()) {
        let effective = effective_limit(Some(limit));
        if limit <= 0 {
            prop_assert_eq!(effective, DEFAULT_MERCHANT_LIMIT);
        } else {
            prop_assert_eq!(effective as i64, limit);
        }
    }

    #[test]
    fn test_forecast_bounds_bracket_prediction(history in series_strategy(), periods in 0u32..15) {
        let forecast = moving_average_forecast(&history, periods);

        prop_assert_eq!(forecast.len(), periods as usize);
        for point in &forecast {
            prop_assert!(point.lower_bound >= Decimal::ZERO);
            prop_assert!(point.lower_bound <= point.predicted_revenue);
            prop_assert!(point.predicted_revenue <= point.upper_bound);
        }
    }

    #[test]
    fn test_forecast_ignores_history_before_window(
        history in series_strategy(),
        noise in 0i64..100_000_000,
    ) {
        prop_assume!(history.len() > WINDOW_DAYS);
        let mut altered = history.clone();
        altered[0].1 = Decimal::new(noise, 2);

        let original = moving_average_forecast(&history, 1);
        let changed = moving_average_forecast(&altered, 1);
        prop_assert_eq!(original, changed);
    }
}
