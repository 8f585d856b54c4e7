use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{TransactionRecord, TransactionStatus};

/// Totals over the full filtered set, independent of the requested page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_count: u64,
    pub total_amount: Decimal,
    pub completed_count: u64,
    pub pending_count: u64,
    pub failed_count: u64,
}

impl TransactionSummary {
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        records.iter().fold(
            Self {
                total_count: records.len() as u64,
                ..Self::default()
            },
            |mut summary, record| {
                summary.total_amount += record.amount;
                match record.recognized_status() {
                    Some(TransactionStatus::Completed) => summary.completed_count += 1,
                    Some(TransactionStatus::Pending) => summary.pending_count += 1,
                    Some(TransactionStatus::Failed) => summary.failed_count += 1,
                    _ => {}
                }
                summary
            },
        )
    }
}

/// One page of a filtered transaction listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionRecord>,
    pub total_transactions: u64,
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
    pub total_pages: u64,
    pub summary: TransactionSummary,
}
