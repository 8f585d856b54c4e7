use async_trait::async_trait;

use super::merchant_repository::MerchantStatsRepository;
use crate::core::aggregate::group_ordered;
use crate::core::Result;
use crate::modules::merchants::models::MerchantStatsRow;
use crate::modules::transactions::models::{TransactionRecord, TransactionStatus};

/// Merchant statistics aggregated on the fly from a fixed record set
#[derive(Debug, Clone, Default)]
pub struct InMemoryMerchantRepository {
    records: Vec<TransactionRecord>,
}

impl InMemoryMerchantRepository {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    fn rows(&self, search: Option<&str>) -> Vec<MerchantStatsRow> {
        let needle = search.map(str::to_lowercase);

        let mut rows: Vec<MerchantStatsRow> =
            group_ordered(&self.records, |record| record.merchant_id.clone())
                .into_iter()
                .filter(|group| {
                    needle
                        .as_deref()
                        .map_or(true, |needle| group.key.to_lowercase().contains(needle))
                })
                .map(|group| {
                    let with_status = |status: TransactionStatus| {
                        group
                            .records
                            .iter()
                            .filter(|record| record.has_status(status))
                            .count() as i64
                    };
                    MerchantStatsRow {
                        total_transactions: Some(group.count() as i64),
                        total_revenue: Some(group.total_amount()),
                        completed_count: Some(with_status(TransactionStatus::Completed)),
                        failed_count: Some(with_status(TransactionStatus::Failed)),
                        pending_count: Some(with_status(TransactionStatus::Pending)),
                        last_transaction_date: group.records.iter().map(|r| r.txn_date).max(),
                        first_transaction_date: group.records.iter().map(|r| r.txn_date).min(),
                        merchant_id: group.key,
                    }
                })
                .collect();

        rows.sort_by(|a, b| a.merchant_id.cmp(&b.merchant_id));
        rows
    }
}

#[async_trait]
impl MerchantStatsRepository for InMemoryMerchantRepository {
    async fn list_stats(
        &self,
        search: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<MerchantStatsRow>> {
        Ok(self
            .rows(search)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, search: Option<&str>) -> Result<u64> {
        Ok(self.rows(search).len() as u64)
    }

    async fn find_stats(&self, merchant_id: &str) -> Result<Option<MerchantStatsRow>> {
        Ok(self
            .rows(None)
            .into_iter()
            .find(|row| row.merchant_id == merchant_id))
    }
}
