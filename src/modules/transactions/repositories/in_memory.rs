use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use std::sync::{Arc, RwLock};

use super::transaction_repository::{TransactionFilter, TransactionSource};
use crate::core::{AppError, DateRange, Result};
use crate::modules::transactions::models::TransactionRecord;

/// Vector-backed transaction source
///
/// Mirrors the ordering contract of the MySQL repository: range queries come back
/// ordered by transaction date then id, recent queries newest first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionSource {
    records: Arc<RwLock<Vec<TransactionRecord>>>,
}

impl InMemoryTransactionSource {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub fn insert(&self, record: TransactionRecord) -> Result<()> {
        self.records
            .write()
            .map_err(|_| AppError::internal("Transaction store lock poisoned"))?
            .push(record);
        Ok(())
    }

    fn select<F>(&self, predicate: F) -> Result<Vec<TransactionRecord>>
    where
        F: Fn(&TransactionRecord) -> bool,
    {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::internal("Transaction store lock poisoned"))?;

        let mut selected: Vec<TransactionRecord> =
            records.iter().filter(|r| predicate(*r)).cloned().collect();
        selected.sort_by_key(|r| (r.txn_date, r.txn_id));
        Ok(selected)
    }
}

#[async_trait]
impl TransactionSource for InMemoryTransactionSource {
    async fn fetch_by_date_range(
        &self,
        range: DateRange,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>> {
        self.select(|record| range.contains(record.txn_date) && filter.matches(record))
    }

    async fn fetch_recent(&self, since: DateTime<Utc>, limit: u32) -> Result<Vec<TransactionRecord>> {
        let mut recent = self.select(|record| {
            record
                .created_at
                .map_or(false, |created_at| created_at > since)
        })?;
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit as usize);
        Ok(recent)
    }

    async fn fetch_by_years(&self, year_a: i32, year_b: i32) -> Result<Vec<TransactionRecord>> {
        self.select(|record| {
            let year = record.txn_date.year();
            year == year_a || year == year_b
        })
    }

    async fn ping(&self) -> Result<()> {
        self.records
            .read()
            .map(|_| ())
            .map_err(|_| AppError::internal("Transaction store lock poisoned"))
    }
}
