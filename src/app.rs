//! Service wiring shared by the binary and the HTTP contract tests

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::core::{Clock, RangeResolver};
use crate::middleware::query_error_handler;
use crate::modules::analytics::{self, AnalyticsService};
use crate::modules::charts::{self, ChartService};
use crate::modules::health;
use crate::modules::merchants::{
    self, InMemoryMerchantRepository, MerchantService, MerchantStatsRepository,
    MySqlMerchantRepository,
};
use crate::modules::reports::{self, ReportService};
use crate::modules::transactions::{
    self, InMemoryTransactionSource, MySqlTransactionRepository, TransactionRecord,
    TransactionService, TransactionSource,
};

pub const API_PREFIX: &str = "/api/v1";

/// Every report service, built once and shared across workers
#[derive(Clone)]
pub struct ApiServices {
    source: Arc<dyn TransactionSource>,
    resolver: RangeResolver,
    transactions: Arc<TransactionService>,
    analytics: Arc<AnalyticsService>,
    reports: Arc<ReportService>,
    charts: Arc<ChartService>,
    merchants: Arc<MerchantService>,
}

impl ApiServices {
    pub fn new(
        source: Arc<dyn TransactionSource>,
        merchant_stats: Arc<dyn MerchantStatsRepository>,
        clock: Arc<dyn Clock>,
        default_range_days: u32,
    ) -> Self {
        Self {
            resolver: RangeResolver::new(clock.clone(), default_range_days),
            transactions: Arc::new(TransactionService::new(source.clone(), clock.clone())),
            analytics: Arc::new(AnalyticsService::new(source.clone())),
            reports: Arc::new(ReportService::new(source.clone(), clock.clone())),
            charts: Arc::new(ChartService::new(source.clone())),
            merchants: Arc::new(MerchantService::new(merchant_stats, clock)),
            source,
        }
    }

    /// Services backed by the MySQL `transaction_master` table
    pub fn mysql(pool: MySqlPool, clock: Arc<dyn Clock>, default_range_days: u32) -> Self {
        Self::new(
            Arc::new(MySqlTransactionRepository::new(pool.clone())),
            Arc::new(MySqlMerchantRepository::new(pool)),
            clock,
            default_range_days,
        )
    }

    /// Services over a fixed in-memory record set
    pub fn in_memory(
        records: Vec<TransactionRecord>,
        clock: Arc<dyn Clock>,
        default_range_days: u32,
    ) -> Self {
        Self::new(
            Arc::new(InMemoryTransactionSource::new(records.clone())),
            Arc::new(InMemoryMerchantRepository::new(records)),
            clock,
            default_range_days,
        )
    }

    /// Register shared state and mount every route under [`API_PREFIX`]
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.source.clone()))
            .app_data(web::Data::new(self.resolver.clone()))
            .app_data(web::Data::new(self.transactions.clone()))
            .app_data(web::Data::new(self.analytics.clone()))
            .app_data(web::Data::new(self.reports.clone()))
            .app_data(web::Data::new(self.charts.clone()))
            .app_data(web::Data::new(self.merchants.clone()))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(
                web::scope(API_PREFIX)
                    .configure(health::configure)
                    .configure(analytics::configure)
                    .configure(reports::configure)
                    .configure(charts::configure)
                    .configure(transactions::configure)
                    .configure(merchants::configure),
            );
    }
}
