// Contract tests for the chart, transaction, merchant and health APIs

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::http::StatusCode;
use helpers::*;

const RANGE: &str = "startDate=2024-03-01&endDate=2024-03-31";

#[actix_web::test]
async fn test_line_chart_contract() {
    let (status, body) = get_json(&format!(
        "/api/v1/charts/line/trends?{}&metric=revenue&groupBy=month",
        RANGE
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_json_fields(&body, &["labels", "datasets", "chartType"]);
    assert_eq!(body["chartType"], "line");
    assert_eq!(body["datasets"][0]["data"][0], 750.0);
    assert_json_fields(
        &body["datasets"][0],
        &["label", "data", "backgroundColor", "borderColor", "borderWidth", "fill"],
    );
}

#[actix_web::test]
async fn test_bar_and_pie_contracts() {
    let (status, bar) =
        get_json(&format!("/api/v1/charts/bar/comparison?{}&compareBy=cardtype", RANGE)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bar["chartType"], "bar");
    assert_eq!(bar["labels"][0], "VISA");
    assert_eq!(bar["datasets"].as_array().unwrap().len(), 2);

    let (status, pie) = get_json(&format!("/api/v1/charts/pie/distribution?{}", RANGE)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pie["chartType"], "pie");
    assert_eq!(pie["datasets"][0]["label"], "Distribution");
}

#[actix_web::test]
async fn test_drill_down_contract() {
    let (status, body) = get_json(&format!(
        "/api/v1/charts/drill-down/merchant?{}&categoryValue=MCH-00003",
        RANGE
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["labels"][0], "2024-03-04");
    assert_eq!(body["datasets"][1]["data"][0], 1);
}

#[actix_web::test]
async fn test_drill_down_requires_category_value() {
    let (status, body) =
        get_json(&format!("/api/v1/charts/drill-down/merchant?{}", RANGE)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, 400);
}

#[actix_web::test]
async fn test_recent_transactions_contract() {
    let (status, body) =
        get_json("/api/v1/charts/data/recent?since=2024-03-04T00:00:00Z&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["txnId"], 6);
    assert_json_fields(
        &records[0],
        &["txnId", "merchantId", "amount", "status", "cardType", "txnDate"],
    );
}

#[actix_web::test]
async fn test_transaction_listing_contract() {
    let (status, body) = get_json(&format!(
        "/api/v1/transactions?{}&merchantId=MCH-00001&page=0&size=2",
        RANGE
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_json_fields(
        &body,
        &["transactions", "totalTransactions", "page", "size", "totalPages", "summary"],
    );
    assert_eq!(body["totalTransactions"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["summary"]["completedCount"], 2);
    assert_eq!(body["summary"]["totalAmount"], "600.00");
}

#[actix_web::test]
async fn test_merchant_listing_contract() {
    let (status, body) = get_json("/api/v1/merchants?limit=2&offset=0&search=mch").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["merchants"].as_array().unwrap().len(), 2);
    assert_json_fields(
        &body["pagination"],
        &["total", "limit", "offset", "currentPage", "totalPages", "hasNext", "hasPrevious"],
    );
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["merchants"][0]["merchantName"], "Merchant 00001");
    assert_eq!(body["merchants"][0]["status"], "active");
    assert_camel_case_keys(&body);
}

#[actix_web::test]
async fn test_merchant_detail_and_not_found() {
    let (status, body) = get_json("/api/v1/merchants/MCH-00003").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["merchantId"], "MCH-00003");
    assert_eq!(body["pendingCount"], 1);

    let (status, body) = get_json("/api/v1/merchants/MCH-99999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, 404);
}

#[actix_web::test]
async fn test_health_and_readiness() {
    let (status, body) = get_json("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "payinsight");

    let (status, body) = get_json("/api/v1/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"]["transactionStore"], true);
}
