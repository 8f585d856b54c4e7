use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::{DateRangeQuery, RangeResolver};
use crate::modules::charts::services::ChartService;
use crate::modules::transactions::TransactionService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartQuery {
    #[serde(default = "default_metric")]
    pub metric: String,
    #[serde(default = "default_group_by")]
    pub group_by: String,
}

fn default_metric() -> String {
    "revenue".to_string()
}

fn default_group_by() -> String {
    "day".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartQuery {
    #[serde(default = "default_compare_by")]
    pub compare_by: String,
}

fn default_compare_by() -> String {
    "merchant".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChartQuery {
    #[serde(default = "default_distribute_by")]
    pub distribute_by: String,
}

fn default_distribute_by() -> String {
    "status".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrillDownQuery {
    pub category_value: String,
}

/// Query parameters for the recent-transactions feed
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentQuery {
    /// RFC 3339 instant
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
}

/// GET /charts/line/trends
pub async fn get_line_chart(
    service: web::Data<Arc<ChartService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
    query: web::Query<LineChartQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let chart = service
        .line_chart(range, &query.metric, &query.group_by)
        .await?;

    Ok(HttpResponse::Ok().json(chart))
}

/// GET /charts/bar/comparison
pub async fn get_bar_chart(
    service: web::Data<Arc<ChartService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
    query: web::Query<BarChartQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let chart = service.bar_chart(range, &query.compare_by).await?;

    Ok(HttpResponse::Ok().json(chart))
}

/// GET /charts/pie/distribution
pub async fn get_pie_chart(
    service: web::Data<Arc<ChartService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
    query: web::Query<PieChartQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let chart = service.pie_chart(range, &query.distribute_by).await?;

    Ok(HttpResponse::Ok().json(chart))
}

/// GET /charts/drill-down/{category}
pub async fn get_drill_down(
    service: web::Data<Arc<ChartService>>,
    resolver: web::Data<RangeResolver>,
    path: web::Path<String>,
    range: web::Query<DateRangeQuery>,
    query: web::Query<DrillDownQuery>,
) -> Result<HttpResponse, AppError> {
    let category = path.into_inner();
    let range = resolver.resolve(&range)?;
    let chart = service
        .drill_down(&category, &query.category_value, range)
        .await?;

    Ok(HttpResponse::Ok().json(chart))
}

/// GET /charts/data/recent
pub async fn get_recent_transactions(
    service: web::Data<Arc<TransactionService>>,
    query: web::Query<RecentQuery>,
) -> Result<HttpResponse, AppError> {
    let transactions = service
        .recent_transactions(query.since, query.limit)
        .await?;

    Ok(HttpResponse::Ok().json(transactions))
}

/// Configure chart routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/charts")
            .route("/line/trends", web::get().to(get_line_chart))
            .route("/bar/comparison", web::get().to(get_bar_chart))
            .route("/pie/distribution", web::get().to(get_pie_chart))
            .route("/drill-down/{category}", web::get().to(get_drill_down))
            .route("/data/recent", web::get().to(get_recent_transactions)),
    );
}
