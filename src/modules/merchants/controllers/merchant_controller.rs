use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::merchants::services::merchant_service::{
    MerchantService, DEFAULT_MERCHANT_PAGE,
};

/// Query parameters for listing merchants
#[derive(Debug, Deserialize)]
pub struct ListMerchantsQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    pub search: Option<String>,
}

fn default_limit() -> u32 {
    DEFAULT_MERCHANT_PAGE
}

/// List merchants with transaction statistics
/// GET /merchants
pub async fn list_merchants(
    service: web::Data<Arc<MerchantService>>,
    query: web::Query<ListMerchantsQuery>,
) -> Result<HttpResponse, AppError> {
    let response = service
        .list_merchants(query.limit, query.offset, query.search.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Get statistics for one merchant
/// GET /merchants/{id}
pub async fn get_merchant(
    service: web::Data<Arc<MerchantService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let merchant_id = path.into_inner();
    let merchant = service.get_merchant(&merchant_id).await?;

    Ok(HttpResponse::Ok().json(merchant))
}

/// Configure merchant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/merchants")
            .route("", web::get().to(list_merchants))
            .route("/{id}", web::get().to(get_merchant)),
    );
}
