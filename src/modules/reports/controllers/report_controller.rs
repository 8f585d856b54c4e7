use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::{DateRangeQuery, RangeResolver};
use crate::modules::reports::services::forecast::DEFAULT_PERIODS;
use crate::modules::reports::services::ReportService;

/// Query parameters for revenue by period
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByPeriodQuery {
    #[serde(default = "default_period")]
    pub period: String,
}

fn default_period() -> String {
    "daily".to_string()
}

/// Query parameters for merchant rankings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantRankingQuery {
    pub limit: Option<i64>,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

fn default_sort_by() -> String {
    "revenue".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastQuery {
    #[serde(default = "default_periods")]
    pub periods: i64,
}

fn default_periods() -> i64 {
    i64::from(DEFAULT_PERIODS)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthQuery {
    pub current_year: Option<i32>,
    pub comparison_year: Option<i32>,
}

/// GET /reports/revenue/by-period
pub async fn get_revenue_by_period(
    service: web::Data<Arc<ReportService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
    query: web::Query<RevenueByPeriodQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let response = service.revenue_by_period(range, &query.period).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /reports/revenue/by-merchant
pub async fn get_revenue_by_merchant(
    service: web::Data<Arc<ReportService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
    query: web::Query<MerchantRankingQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let response = service.revenue_by_merchant(range, query.limit).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /reports/revenue/forecast
///
/// The history window is always the last 30 days; date parameters are not read.
pub async fn get_revenue_forecast(
    service: web::Data<Arc<ReportService>>,
    query: web::Query<ForecastQuery>,
) -> Result<HttpResponse, AppError> {
    let response = service.forecast_revenue(query.periods).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /reports/revenue/growth
pub async fn get_growth_analysis(
    service: web::Data<Arc<ReportService>>,
    query: web::Query<GrowthQuery>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .analyze_growth(query.current_year, query.comparison_year)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /reports/merchants/top-performers
pub async fn get_top_performers(
    service: web::Data<Arc<ReportService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
    query: web::Query<MerchantRankingQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let response = service
        .top_performers(range, query.limit, &query.sort_by)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/revenue/by-period", web::get().to(get_revenue_by_period))
            .route("/revenue/by-merchant", web::get().to(get_revenue_by_merchant))
            .route("/revenue/forecast", web::get().to(get_revenue_forecast))
            .route("/revenue/growth", web::get().to(get_growth_analysis))
            .route("/merchants/top-performers", web::get().to(get_top_performers)),
    );
}
