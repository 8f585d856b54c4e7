use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::{DateRangeQuery, RangeResolver};
use crate::modules::transactions::repositories::TransactionFilter;
use crate::modules::transactions::services::transaction_service::{
    TransactionService, DEFAULT_PAGE_SIZE,
};

/// Query parameters for listing transactions
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsQuery {
    pub merchant_id: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// List transactions with a summary of the filtered set
/// GET /transactions
pub async fn list_transactions(
    service: web::Data<Arc<TransactionService>>,
    resolver: web::Data<RangeResolver>,
    range: web::Query<DateRangeQuery>,
    query: web::Query<ListTransactionsQuery>,
) -> Result<HttpResponse, AppError> {
    let range = resolver.resolve(&range)?;
    let query = query.into_inner();
    let filter = TransactionFilter {
        merchant_id: query.merchant_id,
        status: query.status,
        card_type: None,
    };

    let response = service
        .list_transactions(range, &filter, query.page, query.size)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Configure transaction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/transactions", web::get().to(list_transactions));
}
