use std::sync::Arc;
use tracing::{debug, info};

use super::{distribution_analyzer, trend_analyzer, volume_analyzer};
use crate::core::{DateRange, Result};
use crate::modules::analytics::models::{
    CardDistributionResponse, PeakTimesResponse, SuccessRateResponse, TrendsResponse,
    VolumeAnalyticsResponse,
};
use crate::modules::transactions::models::TransactionRecord;
use crate::modules::transactions::{TransactionFilter, TransactionSource};

/// Transaction analytics over a resolved date range
///
/// Each report fetches its record set once and runs the analyzers in memory.
pub struct AnalyticsService {
    source: Arc<dyn TransactionSource>,
}

impl AnalyticsService {
    pub fn new(source: Arc<dyn TransactionSource>) -> Self {
        Self { source }
    }

    async fn fetch(&self, report: &str, range: DateRange) -> Result<Vec<TransactionRecord>> {
        let records = self
            .source
            .fetch_by_date_range(range, &TransactionFilter::default())
            .await?;

        debug!(
            report,
            start = %range.start,
            end = %range.end,
            records = records.len(),
            "Fetched records for analytics report"
        );

        Ok(records)
    }

    pub async fn transaction_volume(
        &self,
        range: DateRange,
        group_by: &str,
    ) -> Result<VolumeAnalyticsResponse> {
        info!(range = %range, group_by, "Computing transaction volume");
        let records = self.fetch("volume", range).await?;
        Ok(volume_analyzer::transaction_volume(&records, group_by, range))
    }

    pub async fn success_rate(&self, range: DateRange) -> Result<SuccessRateResponse> {
        info!(range = %range, "Computing success rate");
        let records = self.fetch("success-rate", range).await?;
        Ok(volume_analyzer::success_rate(&records))
    }

    pub async fn trends(&self, range: DateRange) -> Result<TrendsResponse> {
        info!(range = %range, "Computing transaction trends");
        let records = self.fetch("trends", range).await?;
        Ok(trend_analyzer::trends(&records))
    }

    pub async fn peak_times(&self, range: DateRange) -> Result<PeakTimesResponse> {
        info!(range = %range, "Computing peak times");
        let records = self.fetch("peak-times", range).await?;
        Ok(trend_analyzer::peak_times(&records))
    }

    pub async fn card_distribution(&self, range: DateRange) -> Result<CardDistributionResponse> {
        info!(range = %range, "Computing card distribution");
        let records = self.fetch("card-distribution", range).await?;
        Ok(distribution_analyzer::card_distribution(&records))
    }
}
