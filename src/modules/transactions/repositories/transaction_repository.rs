use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, MySqlPool, QueryBuilder};

use super::super::models::TransactionRecord;
use crate::core::{DateRange, Result};

const RECORD_COLUMNS: &str = "txn_id, merchant_id, amount, status, card_type, txn_date, \
                              local_txn_datetime, created_at";

/// Optional narrowing applied on top of a date range
///
/// Every populated field is an exact-equality match on the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub merchant_id: Option<String>,
    pub status: Option<String>,
    pub card_type: Option<String>,
}

impl TransactionFilter {
    pub fn merchant(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: Some(merchant_id.into()),
            ..Self::default()
        }
    }

    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        self.merchant_id
            .as_deref()
            .map_or(true, |merchant_id| record.merchant_id == merchant_id)
            && self
                .status
                .as_deref()
                .map_or(true, |status| record.status == status)
            && self
                .card_type
                .as_deref()
                .map_or(true, |card_type| record.card_type == card_type)
    }
}

/// Read access to transaction records for report computation
///
/// Results come back ordered by transaction date, then id.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Records with `txn_date` inside `range` that match `filter`
    async fn fetch_by_date_range(
        &self,
        range: DateRange,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>>;

    /// Records created after `since`, newest first
    async fn fetch_recent(&self, since: DateTime<Utc>, limit: u32) -> Result<Vec<TransactionRecord>>;

    /// Records whose transaction year is either of the two years
    async fn fetch_by_years(&self, year_a: i32, year_b: i32) -> Result<Vec<TransactionRecord>>;

    /// Cheap reachability check for the readiness endpoint
    async fn ping(&self) -> Result<()>;
}

/// MySQL-backed transaction source reading `transaction_master`
pub struct MySqlTransactionRepository {
    pool: MySqlPool,
}

impl MySqlTransactionRepository {
    /// Create a new MySqlTransactionRepository
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl TransactionSource for MySqlTransactionRepository {
    async fn fetch_by_date_range(
        &self,
        range: DateRange,
        filter: &TransactionFilter,
    ) -> Result<Vec<TransactionRecord>> {
        let mut query: QueryBuilder<MySql> = QueryBuilder::new("SELECT ");
        query.push(RECORD_COLUMNS);
        query.push(" FROM transaction_master WHERE txn_date BETWEEN ");
        query.push_bind(range.start);
        query.push(" AND ");
        query.push_bind(range.end);

        if let Some(merchant_id) = &filter.merchant_id {
            query.push(" AND merchant_id = ").push_bind(merchant_id.clone());
        }
        if let Some(status) = &filter.status {
            query.push(" AND status = ").push_bind(status.clone());
        }
        if let Some(card_type) = &filter.card_type {
            query.push(" AND card_type = ").push_bind(card_type.clone());
        }
        query.push(" ORDER BY txn_date, txn_id");

        let records = query
            .build_query_as::<TransactionRecord>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            start = %range.start,
            end = %range.end,
            count = records.len(),
            "Fetched transactions by date range"
        );

        Ok(records)
    }

    async fn fetch_recent(&self, since: DateTime<Utc>, limit: u32) -> Result<Vec<TransactionRecord>> {
        let records = sqlx::query_as::<_, TransactionRecord>(&format!(
            r#"
            SELECT {}
            FROM transaction_master
            WHERE created_at > ?
            ORDER BY created_at DESC
            LIMIT ?
            "#,
            RECORD_COLUMNS
        ))
        .bind(since)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn fetch_by_years(&self, year_a: i32, year_b: i32) -> Result<Vec<TransactionRecord>> {
        let records = sqlx::query_as::<_, TransactionRecord>(&format!(
            r#"
            SELECT {}
            FROM transaction_master
            WHERE YEAR(txn_date) IN (?, ?)
            ORDER BY txn_date, txn_id
            "#,
            RECORD_COLUMNS
        ))
        .bind(year_a)
        .bind(year_b)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
