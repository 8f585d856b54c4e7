// Contract tests for the revenue report API
//
// Exercises GET /api/v1/reports/* over HTTP. Decimal amounts serialize as strings,
// percentages and rates as numbers.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use helpers::*;

const RANGE: &str = "startDate=2024-03-01&endDate=2024-03-31";

#[actix_web::test]
async fn test_revenue_by_period_contract() {
    let (status, body) = get_json(&format!(
        "/api/v1/reports/revenue/by-period?{}&period=monthly",
        RANGE
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_json_fields(&body, &["periods", "totalRevenue", "totalTransactions", "groupBy"]);
    assert_eq!(body["groupBy"], "monthly");
    assert_eq!(body["totalRevenue"], "750.00");
    assert_eq!(body["totalTransactions"], 6);
    assert_json_fields(
        &body["periods"][0],
        &["period", "revenue", "transactionCount", "averageTransaction"],
    );
}

#[actix_web::test]
async fn test_revenue_by_period_defaults_to_daily() {
    let (_, body) = get_json(&format!("/api/v1/reports/revenue/by-period?{}", RANGE)).await;

    assert_eq!(body["groupBy"], "daily");
    assert_eq!(body["periods"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_revenue_by_merchant_contract() {
    let (status, body) = get_json(&format!(
        "/api/v1/reports/revenue/by-merchant?{}&limit=2",
        RANGE
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMerchants"], 2);
    assert_eq!(body["totalRevenue"], "724.50");

    let first = &body["merchants"][0];
    assert_json_fields(
        first,
        &[
            "merchantId",
            "revenue",
            "transactionCount",
            "averageTransaction",
            "percentageOfTotal",
            "rank",
        ],
    );
    assert_eq!(first["rank"], 1);
    assert!(first["revenue"].is_string());
    assert!(first["percentageOfTotal"].is_number());
}

#[actix_web::test]
async fn test_non_positive_limit_uses_default() {
    let (status, body) = get_json(&format!(
        "/api/v1/reports/revenue/by-merchant?{}&limit=0",
        RANGE
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalMerchants"], 3);
}

#[actix_web::test]
async fn test_top_performers_contract() {
    let (status, body) = get_json(&format!(
        "/api/v1/reports/merchants/top-performers?{}&limit=1&sortBy=count",
        RANGE
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_json_fields(&body, &["topMerchants", "sortedBy", "dateRange"]);
    assert_eq!(body["sortedBy"], "count");
    assert_eq!(body["topMerchants"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_forecast_contract() {
    let (status, body) = get_json("/api/v1/reports/revenue/forecast?periods=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_json_fields(&body, &["forecast", "historicalData", "method", "confidence"]);
    assert_eq!(body["method"], "moving_average");
    assert_eq!(body["confidence"], 0.75);
    assert_eq!(body["forecast"].as_array().unwrap().len(), 3);
    assert_json_fields(
        &body["forecast"][0],
        &["period", "predictedRevenue", "lowerBound", "upperBound"],
    );
    // 187.50 minus the unrounded standard deviation of the trailing window
    let lower_bound = body["forecast"][0]["lowerBound"].as_str().unwrap();
    assert!(lower_bound.starts_with("113.5490027"), "lowerBound was {}", lower_bound);
    let upper_bound = body["forecast"][0]["upperBound"].as_str().unwrap();
    assert!(upper_bound.starts_with("261.4509972"), "upperBound was {}", upper_bound);
}

#[actix_web::test]
async fn test_forecast_defaults_to_seven_periods() {
    let (_, body) = get_json("/api/v1/reports/revenue/forecast").await;
    assert_eq!(body["forecast"].as_array().unwrap().len(), 7);
}

#[actix_web::test]
async fn test_growth_contract() {
    let (status, body) =
        get_json("/api/v1/reports/revenue/growth?currentYear=2024&comparisonYear=2023").await;

    assert_eq!(status, StatusCode::OK);
    assert_json_fields(
        &body,
        &[
            "currentYear",
            "comparisonYear",
            "overallGrowthRate",
            "currentYearTotal",
            "comparisonYearTotal",
            "monthlyComparison",
        ],
    );
    assert_eq!(body["overallGrowthRate"], 275.0);

    let march = &body["monthlyComparison"][2];
    assert_eq!(march["monthName"], "MARCH");
    assert_json_fields(
        march,
        &["month", "monthName", "currentYearRevenue", "previousYearRevenue", "growthRate"],
    );
    assert_camel_case_keys(&body);
}

#[actix_web::test]
async fn test_invalid_query_parameter_is_bad_request() {
    let (status, body) = get_json("/api/v1/reports/revenue/forecast?periods=soon").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, 400);
}

#[actix_web::test]
async fn test_malformed_end_date_is_bad_request() {
    let (status, body) =
        get_json("/api/v1/reports/revenue/by-merchant?startDate=2024-03-01&endDate=31-03-2024").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, 400);
}
