use std::sync::Arc;
use tracing::{debug, info};

use super::chart_projection;
use crate::core::{DateRange, GroupBy, Result};
use crate::modules::charts::models::{ChartCategory, ChartData, LineMetric};
use crate::modules::transactions::models::TransactionRecord;
use crate::modules::transactions::{TransactionFilter, TransactionSource};

/// Chart-ready projections of the transaction reports
pub struct ChartService {
    source: Arc<dyn TransactionSource>,
}

impl ChartService {
    pub fn new(source: Arc<dyn TransactionSource>) -> Self {
        Self { source }
    }

    async fn fetch(&self, range: DateRange, filter: &TransactionFilter) -> Result<Vec<TransactionRecord>> {
        let records = self.source.fetch_by_date_range(range, filter).await?;
        debug!(range = %range, records = records.len(), "Fetched records for chart");
        Ok(records)
    }

    pub async fn line_chart(&self, range: DateRange, metric: &str, group_by: &str) -> Result<ChartData> {
        let metric = LineMetric::parse(metric);
        let group_by = GroupBy::parse(group_by);
        info!(range = %range, ?metric, group_by = %group_by, "Building line chart");

        let records = self.fetch(range, &TransactionFilter::default()).await?;
        Ok(chart_projection::line_chart(&records, metric, group_by))
    }

    /// Unrecognized `compare_by` values compare merchants
    pub async fn bar_chart(&self, range: DateRange, compare_by: &str) -> Result<ChartData> {
        let category = ChartCategory::parse(compare_by).unwrap_or(ChartCategory::Merchant);
        info!(range = %range, ?category, "Building bar chart");

        let records = self.fetch(range, &TransactionFilter::default()).await?;
        Ok(chart_projection::bar_chart(&records, category))
    }

    /// Unrecognized `distribute_by` values distribute by status
    pub async fn pie_chart(&self, range: DateRange, distribute_by: &str) -> Result<ChartData> {
        let category = ChartCategory::parse(distribute_by).unwrap_or(ChartCategory::Status);
        info!(range = %range, ?category, "Building pie chart");

        let records = self.fetch(range, &TransactionFilter::default()).await?;
        Ok(chart_projection::pie_chart(&records, category))
    }

    /// Daily breakdown for one concrete category value
    ///
    /// Merchants are fetched already scoped; card types and statuses are filtered by exact
    /// equality after fetching the whole range. An unrecognized category (including the
    /// `card` alias bar and pie charts accept) is not filtered.
    pub async fn drill_down(
        &self,
        category: &str,
        category_value: &str,
        range: DateRange,
    ) -> Result<ChartData> {
        let category = ChartCategory::parse_drill_down(category);
        info!(range = %range, ?category, category_value, "Building drill-down");

        let records = match category {
            Some(ChartCategory::Merchant) => {
                self.fetch(range, &TransactionFilter::merchant(category_value))
                    .await?
            }
            Some(ChartCategory::CardType) => {
                let mut records = self.fetch(range, &TransactionFilter::default()).await?;
                records.retain(|record| record.card_type == category_value);
                records
            }
            Some(ChartCategory::Status) => {
                let mut records = self.fetch(range, &TransactionFilter::default()).await?;
                records.retain(|record| record.status == category_value);
                records
            }
            None => self.fetch(range, &TransactionFilter::default()).await?,
        };

        Ok(chart_projection::drill_down_chart(&records))
    }
}
