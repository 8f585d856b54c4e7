use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::info;

use super::super::models::{TransactionListResponse, TransactionRecord, TransactionSummary};
use super::super::repositories::{TransactionFilter, TransactionSource};
use crate::core::{Clock, DateRange, Result};

/// Largest page or batch handed back in one response
pub const MAX_PAGE_SIZE: u32 = 100;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub const DEFAULT_RECENT_LIMIT: u32 = 50;

/// Lookback used when a recent-transactions caller omits `since`
pub const DEFAULT_RECENT_WINDOW_SECS: i64 = 300;

/// Raw transaction access: filtered listings and the recent feed
pub struct TransactionService {
    source: Arc<dyn TransactionSource>,
    clock: Arc<dyn Clock>,
}

impl TransactionService {
    /// Create a new TransactionService
    ///
    /// # Arguments
    /// * `source` - Transaction record source
    /// * `clock` - Time source for the recent-transactions default window
    pub fn new(source: Arc<dyn TransactionSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    /// One page of the transactions in `range` matching `filter`
    ///
    /// The summary covers the whole filtered set, not only the returned page.
    pub async fn list_transactions(
        &self,
        range: DateRange,
        filter: &TransactionFilter,
        page: u32,
        size: u32,
    ) -> Result<TransactionListResponse> {
        let size = size.clamp(1, MAX_PAGE_SIZE);
        let records = self.source.fetch_by_date_range(range, filter).await?;

        let summary = TransactionSummary::from_records(&records);
        let total_transactions = records.len() as u64;
        let total_pages = total_transactions.div_ceil(u64::from(size));

        let transactions: Vec<TransactionRecord> = records
            .into_iter()
            .skip(page as usize * size as usize)
            .take(size as usize)
            .collect();

        info!(
            range = %range,
            total = total_transactions,
            page,
            size,
            "Listed transactions"
        );

        Ok(TransactionListResponse {
            transactions,
            total_transactions,
            page,
            size,
            total_pages,
            summary,
        })
    }

    /// Transactions created after `since` (default: the last five minutes), newest first
    ///
    /// `limit` defaults to 50 and is clamped to 1..=100.
    pub async fn recent_transactions(
        &self,
        since: Option<DateTime<Utc>>,
        limit: Option<u32>,
    ) -> Result<Vec<TransactionRecord>> {
        let since = since
            .unwrap_or_else(|| self.clock.now() - Duration::seconds(DEFAULT_RECENT_WINDOW_SECS));
        let limit = limit
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .clamp(1, MAX_PAGE_SIZE);

        self.source.fetch_recent(since, limit).await
    }
}
