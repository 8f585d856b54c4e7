use chrono::Datelike;
use std::sync::Arc;
use tracing::{info, warn};

use super::{forecast, revenue_analyzer};
use crate::core::{Clock, DateRange, Result};
use crate::modules::reports::models::{
    GrowthAnalysisResponse, RevenueByMerchantResponse, RevenueByPeriodResponse,
    RevenueForecastResponse, TopPerformersResponse,
};
use crate::modules::transactions::models::TransactionRecord;
use crate::modules::transactions::{TransactionFilter, TransactionSource};

/// Service for revenue reporting
///
/// Revenue by period and by merchant, top performers, the moving-average forecast
/// and year-over-year growth.
pub struct ReportService {
    source: Arc<dyn TransactionSource>,
    clock: Arc<dyn Clock>,
}

impl ReportService {
    /// Create a new report service
    pub fn new(source: Arc<dyn TransactionSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    async fn fetch_range(&self, range: DateRange) -> Result<Vec<TransactionRecord>> {
        self.source
            .fetch_by_date_range(range, &TransactionFilter::default())
            .await
    }

    /// Revenue grouped by `group_by` (`day`, `week`, `month` and their `-ly` forms)
    pub async fn revenue_by_period(
        &self,
        range: DateRange,
        group_by: &str,
    ) -> Result<RevenueByPeriodResponse> {
        info!(range = %range, period = group_by, "Generating revenue by period");

        let records = self.fetch_range(range).await?;
        Ok(revenue_analyzer::revenue_by_period(&records, group_by))
    }

    /// Merchants ranked by revenue; non-positive or missing limits fall back to 10
    pub async fn revenue_by_merchant(
        &self,
        range: DateRange,
        limit: Option<i64>,
    ) -> Result<RevenueByMerchantResponse> {
        let limit = revenue_analyzer::effective_limit(limit);
        info!(range = %range, limit, "Generating revenue by merchant");

        let records = self.fetch_range(range).await?;
        Ok(revenue_analyzer::revenue_by_merchant(&records, limit))
    }

    /// Top merchants by revenue
    ///
    /// `sort_by` is reported back unchanged and does not affect the ordering.
    pub async fn top_performers(
        &self,
        range: DateRange,
        limit: Option<i64>,
        sort_by: &str,
    ) -> Result<TopPerformersResponse> {
        let limit = revenue_analyzer::effective_limit(limit);
        info!(range = %range, limit, sort_by, "Generating top performers");

        let records = self.fetch_range(range).await?;
        Ok(revenue_analyzer::top_performers(&records, limit, sort_by, range))
    }

    /// Forecast `periods` days ahead from the trailing 30 days ending today
    ///
    /// Any caller-supplied range is irrelevant here: the history window always comes
    /// from the injected clock.
    pub async fn forecast_revenue(&self, periods: i64) -> Result<RevenueForecastResponse> {
        let periods = u32::try_from(periods.max(0)).unwrap_or(u32::MAX);
        let window = DateRange::trailing(self.clock.today(), forecast::LOOKBACK_DAYS);
        info!(window = %window, periods, "Generating revenue forecast");

        let records = self.fetch_range(window).await?;
        let response = forecast::forecast_revenue(&records, periods);

        if response.historical_data.is_empty() {
            warn!(window = %window, "No revenue history, forecast is empty");
        }

        Ok(response)
    }

    /// Year-over-year monthly growth
    ///
    /// Defaults: the current year against the year before it.
    pub async fn analyze_growth(
        &self,
        current_year: Option<i32>,
        comparison_year: Option<i32>,
    ) -> Result<GrowthAnalysisResponse> {
        let current_year = current_year.unwrap_or_else(|| self.clock.today().year());
        let comparison_year = comparison_year.unwrap_or(current_year - 1);
        info!(current_year, comparison_year, "Analyzing growth");

        let records = self
            .source
            .fetch_by_years(current_year, comparison_year)
            .await?;
        Ok(revenue_analyzer::analyze_growth(
            &records,
            current_year,
            comparison_year,
        ))
    }
}
