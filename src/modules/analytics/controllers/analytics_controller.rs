use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::{DateRangeQuery, RangeResolver};
use crate::modules::analytics::services::AnalyticsService;

/// Query parameters for the volume endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeQuery {
    #[serde(default = "default_group_by")]
    pub group_by: String,
}

fn default_group_by() -> String {
    "day".to_string()
}

/// Transaction volume per period
/// GET /analytics/transactions/volume
pub async fn get_volume(
    service: web::Data<Arc<AnalyticsService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
    query: web::Query<VolumeQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let response = service.transaction_volume(range, &query.group_by).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Status breakdown and success rate
/// GET /analytics/transactions/success-rate
pub async fn get_success_rate(
    service: web::Data<Arc<AnalyticsService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let response = service.success_rate(range).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Daily average-amount trend
/// GET /analytics/transactions/trends
pub async fn get_trends(
    service: web::Data<Arc<AnalyticsService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let response = service.trends(range).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Hour by day-of-week heatmap
/// GET /analytics/transactions/peak-times
pub async fn get_peak_times(
    service: web::Data<Arc<AnalyticsService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let response = service.peak_times(range).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Card type shares
/// GET /analytics/transactions/card-distribution
pub async fn get_card_distribution(
    service: web::Data<Arc<AnalyticsService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let response = service.card_distribution(range).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Configure analytics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/analytics/transactions")
            .route("/volume", web::get().to(get_volume))
            .route("/success-rate", web::get().to(get_success_rate))
            .route("/trends", web::get().to(get_trends))
            .route("/peak-times", web::get().to(get_peak_times))
            .route("/card-distribution", web::get().to(get_card_distribution)),
    );
}
