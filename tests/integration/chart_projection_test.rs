// Integration tests for chart projections
//
// Checks labels, series and style hints produced by ChartService over the fixture
// store. Chart amounts serialize as JSON numbers.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use payinsight::charts::models::{ChartData, ChartType, ChartValue};
use payinsight::charts::ChartService;
use rust_decimal_macros::dec;
use serde_json::json;

fn charts() -> ChartService {
    ChartService::new(sample_source())
}

fn labels(chart: &ChartData) -> Vec<&str> {
    chart.labels.iter().map(String::as_str).collect()
}

#[actix_web::test]
async fn test_daily_revenue_line() {
    let chart = charts()
        .line_chart(march_2024(), "revenue", "day")
        .await
        .unwrap();

    assert_eq!(chart.chart_type, ChartType::Line);
    assert_eq!(
        labels(&chart),
        vec!["2024-03-01", "2024-03-02", "2024-03-04", "2024-03-11"]
    );

    let dataset = &chart.datasets[0];
    assert_eq!(dataset.label, "Revenue");
    assert_eq!(dataset.data[0], ChartValue::Amount(dec!(150.00)));
    assert_eq!(dataset.border_width, Some(2));
    assert_eq!(dataset.fill, Some(true));
    assert_eq!(dataset.border_color.as_deref(), Some("rgb(75, 192, 192)"));
}

#[actix_web::test]
async fn test_weekly_volume_line() {
    let chart = charts()
        .line_chart(march_2024(), "count", "week")
        .await
        .unwrap();

    assert_eq!(labels(&chart), vec!["2024-02-26", "2024-03-04", "2024-03-11"]);
    assert_eq!(chart.datasets[0].label, "Transaction Volume");
    assert_eq!(
        chart.datasets[0].data,
        vec![ChartValue::Count(3), ChartValue::Count(2), ChartValue::Count(1)]
    );
}

#[actix_web::test]
async fn test_merchant_bar_comparison() {
    let chart = charts().bar_chart(march_2024(), "merchant").await.unwrap();

    assert_eq!(chart.chart_type, ChartType::Bar);
    assert_eq!(labels(&chart), vec!["MCH-00001", "MCH-00002", "MCH-00003"]);
    assert_eq!(chart.datasets.len(), 2);
    assert_eq!(chart.datasets[0].label, "Revenue");
    assert_eq!(chart.datasets[1].label, "Transaction Count");
    assert_eq!(
        chart.datasets[1].data,
        vec![ChartValue::Count(3), ChartValue::Count(2), ChartValue::Count(1)]
    );
}

#[actix_web::test]
async fn test_status_bar_has_only_counts() {
    let chart = charts().bar_chart(march_2024(), "status").await.unwrap();

    assert_eq!(labels(&chart), vec!["completed", "failed", "pending", "Completed"]);
    assert_eq!(chart.datasets.len(), 1);
    assert_eq!(chart.datasets[0].label, "Transaction Count");
}

#[actix_web::test]
async fn test_unknown_bar_category_compares_merchants() {
    let chart = charts().bar_chart(march_2024(), "region").await.unwrap();
    assert_eq!(labels(&chart), vec!["MCH-00001", "MCH-00002", "MCH-00003"]);
}

#[actix_web::test]
async fn test_pie_distributions() {
    let by_card = charts().pie_chart(march_2024(), "card").await.unwrap();
    assert_eq!(by_card.chart_type, ChartType::Pie);
    assert_eq!(labels(&by_card), vec!["VISA", "MASTERCARD", "AMEX"]);
    assert_eq!(by_card.datasets.len(), 1);
    assert_eq!(by_card.datasets[0].label, "Distribution");
    assert!(by_card.datasets[0]
        .background_color
        .as_deref()
        .unwrap()
        .starts_with('['));

    let by_merchant = charts().pie_chart(march_2024(), "merchant").await.unwrap();
    assert_eq!(
        by_merchant.datasets[0].data[0],
        ChartValue::Amount(dec!(600.00))
    );

    let fallback = charts().pie_chart(march_2024(), "unknown").await.unwrap();
    assert_eq!(labels(&fallback).len(), 4);
}

#[actix_web::test]
async fn test_merchant_drill_down() {
    let chart = charts()
        .drill_down("merchant", "MCH-00002", march_2024())
        .await
        .unwrap();

    assert_eq!(chart.chart_type, ChartType::Line);
    assert_eq!(labels(&chart), vec!["2024-03-01", "2024-03-04"]);
    assert_eq!(chart.datasets[0].label, "Revenue");
    assert_eq!(
        chart.datasets[0].data,
        vec![ChartValue::Amount(dec!(50.00)), ChartValue::Amount(dec!(74.50))]
    );
    assert_eq!(chart.datasets[1].label, "Count");
}

#[actix_web::test]
async fn test_card_type_drill_down_is_exact_match() {
    let chart = charts()
        .drill_down("cardtype", "VISA", march_2024())
        .await
        .unwrap();
    assert_eq!(labels(&chart), vec!["2024-03-01", "2024-03-02", "2024-03-04"]);

    let lowercase = charts()
        .drill_down("cardtype", "visa", march_2024())
        .await
        .unwrap();
    assert!(lowercase.labels.is_empty());

    // the `card` alias is for bar and pie charts only
    let alias = charts()
        .drill_down("card", "VISA", march_2024())
        .await
        .unwrap();
    assert_eq!(alias.labels.len(), 4);
}

#[actix_web::test]
async fn test_chart_json_shape() {
    let chart = charts()
        .line_chart(march_2024(), "revenue", "month")
        .await
        .unwrap();

    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["chartType"], "line");
    assert_eq!(json["labels"], json!(["2024-03-01"]));
    assert_eq!(json["datasets"][0]["data"], json!([750.0]));
    assert_eq!(json["datasets"][0]["borderWidth"], 2);
    assert_camel_case_keys(&json);
}
