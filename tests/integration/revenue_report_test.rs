// Integration tests for revenue reporting
//
// Runs ReportService over the in-memory fixture store with the clock pinned to
// 2024-03-31.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::*;
use payinsight::core::FixedClock;
use payinsight::merchants::models::MerchantActivity;
use payinsight::merchants::{InMemoryMerchantRepository, MerchantService};
use payinsight::reports::services::forecast::{CONFIDENCE, METHOD};
use payinsight::reports::ReportService;
use payinsight::transactions::InMemoryTransactionSource;
use rust_decimal_macros::dec;

fn reports() -> ReportService {
    ReportService::new(sample_source(), fixed_clock())
}

#[actix_web::test]
async fn test_revenue_by_period_totals_match_buckets() {
    let response = reports()
        .revenue_by_period(march_2024(), "daily")
        .await
        .unwrap();

    assert_eq!(response.periods.len(), 4);
    assert_eq!(response.periods[0].period, "2024-03-01");
    assert_eq!(response.periods[0].revenue, dec!(150.00));
    assert_eq!(response.periods[0].average_transaction, dec!(75.00));
    assert_eq!(response.total_revenue, dec!(750.00));
    assert_eq!(response.total_transactions, 6);
    assert_eq!(response.group_by, "daily");
}

#[actix_web::test]
async fn test_revenue_by_month() {
    let response = reports()
        .revenue_by_period(march_2024(), "monthly")
        .await
        .unwrap();

    assert_eq!(response.periods.len(), 1);
    assert_eq!(response.periods[0].period, "2024-03-01");
    assert_eq!(response.periods[0].transaction_count, 6);
}

#[actix_web::test]
async fn test_revenue_by_merchant_ranks_and_shares() {
    let response = reports()
        .revenue_by_merchant(march_2024(), Some(10))
        .await
        .unwrap();

    let ids: Vec<&str> = response
        .merchants
        .iter()
        .map(|m| m.merchant_id.as_str())
        .collect();
    assert_eq!(ids, vec!["MCH-00001", "MCH-00002", "MCH-00003"]);

    assert_eq!(response.total_merchants, 3);
    assert_eq!(response.total_revenue, dec!(750.00));

    let first = &response.merchants[0];
    assert_eq!(first.rank, 1);
    assert_eq!(first.revenue, dec!(600.00));
    assert_eq!(first.transaction_count, 3);
    assert_eq!(first.average_transaction, dec!(200.00));
    assert_close(first.percentage_of_total, 80.0);
    assert_close(response.merchants[1].percentage_of_total, 16.6);
    assert_close(response.merchants[2].percentage_of_total, 3.4);
}

#[actix_web::test]
async fn test_limited_ranking_shares_are_of_returned_set() {
    let response = reports()
        .revenue_by_merchant(march_2024(), Some(2))
        .await
        .unwrap();

    assert_eq!(response.total_merchants, 2);
    assert_eq!(response.total_revenue, dec!(724.50));
    assert_close(response.merchants[0].percentage_of_total, 82.82);
    assert_close(response.merchants[1].percentage_of_total, 17.18);
}

#[actix_web::test]
async fn test_non_positive_limit_falls_back_to_ten() {
    for limit in [Some(0), Some(-5), None] {
        let response = reports()
            .revenue_by_merchant(march_2024(), limit)
            .await
            .unwrap();
        assert_eq!(response.total_merchants, 3);
    }
}

#[actix_web::test]
async fn test_top_performers_echo_sort_key() {
    let response = reports()
        .top_performers(march_2024(), Some(1), "transactions")
        .await
        .unwrap();

    assert_eq!(response.top_merchants.len(), 1);
    assert_eq!(response.top_merchants[0].merchant_id, "MCH-00001");
    assert_close(response.top_merchants[0].percentage_of_total, 100.0);
    assert_eq!(response.sorted_by, "transactions");
    assert_eq!(response.date_range, "2024-03-01 to 2024-03-31");
}

#[actix_web::test]
async fn test_forecast_from_trailing_window() {
    let response = reports().forecast_revenue(7).await.unwrap();

    assert_eq!(response.method, METHOD);
    assert_eq!(response.confidence, CONFIDENCE);
    assert_eq!(response.historical_data.len(), 4);
    assert_eq!(response.forecast.len(), 7);

    // Window [150, 200, 100, 300]: mean 187.50, variance 5468.75, std ~73.95
    let first = &response.forecast[0];
    assert_eq!(first.period, "2024-03-12");
    assert_eq!(first.predicted_revenue, dec!(187.50));
    // sqrt(5468.75) = 73.9509972887..., carried without rounding
    assert!(first.lower_bound > dec!(113.549002) && first.lower_bound < dec!(113.549003));
    assert!(first.upper_bound > dec!(261.450997) && first.upper_bound < dec!(261.450998));

    assert_eq!(response.forecast[6].period, "2024-03-18");
    assert!(response
        .forecast
        .iter()
        .all(|point| point.predicted_revenue == first.predicted_revenue));
}

#[actix_web::test]
async fn test_forecast_without_history_or_periods() {
    let empty = ReportService::new(
        Arc::new(InMemoryTransactionSource::default()),
        fixed_clock(),
    );
    let response = empty.forecast_revenue(7).await.unwrap();
    assert!(response.forecast.is_empty());
    assert!(response.historical_data.is_empty());

    let negative = reports().forecast_revenue(-3).await.unwrap();
    assert!(negative.forecast.is_empty());
    assert_eq!(negative.historical_data.len(), 4);
}

#[actix_web::test]
async fn test_year_over_year_growth() {
    let response = reports().analyze_growth(None, None).await.unwrap();

    assert_eq!(response.current_year, 2024);
    assert_eq!(response.comparison_year, 2023);
    assert_eq!(response.current_year_total, dec!(750.00));
    assert_eq!(response.comparison_year_total, dec!(200.00));
    assert_close(response.overall_growth_rate, 275.0);

    assert_eq!(response.monthly_comparison.len(), 12);
    let march = &response.monthly_comparison[2];
    assert_eq!(march.month, 3);
    assert_eq!(march.month_name, "MARCH");
    assert_close(march.growth_rate, 275.0);

    let january = &response.monthly_comparison[0];
    assert_eq!(january.month_name, "JANUARY");
    assert_eq!(january.growth_rate, 0.0);
}

#[actix_web::test]
async fn test_growth_against_year_without_revenue_is_zero() {
    let response = reports().analyze_growth(Some(2024), Some(2020)).await.unwrap();

    assert_eq!(response.comparison_year_total, dec!(0));
    assert_eq!(response.overall_growth_rate, 0.0);
}

#[actix_web::test]
async fn test_merchant_statistics() {
    let service = MerchantService::new(
        Arc::new(InMemoryMerchantRepository::new(sample_records())),
        Arc::new(FixedClock::at_date(today())),
    );

    let listing = service.list_merchants(2, 0, None).await.unwrap();
    assert_eq!(listing.pagination.total, 3);
    assert!(listing.pagination.has_next);

    let merchant = &listing.merchants[0];
    assert_eq!(merchant.merchant_id, "MCH-00001");
    assert_eq!(merchant.merchant_name, "Merchant 00001");
    assert_eq!(merchant.total_transactions, 4);
    assert_eq!(merchant.total_revenue, dec!(680.00));
    assert_eq!(merchant.completed_count, 3);
    assert_close(merchant.success_rate, 75.0);
    assert_eq!(merchant.average_transaction_amount, dec!(170.00));
    assert_eq!(merchant.status, MerchantActivity::Active);
    assert_eq!(merchant.first_transaction_date, Some(date(2023, 3, 20)));
    assert_eq!(merchant.last_transaction_date, Some(date(2024, 3, 11)));
}
