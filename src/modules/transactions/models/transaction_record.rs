use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Transaction status values the reports recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Payment successfully completed
    Completed,

    /// Transaction pending confirmation
    Pending,

    /// Payment failed
    Failed,

    /// Payment reversed after completion
    Reversed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Failed => write!(f, "failed"),
            TransactionStatus::Reversed => write!(f, "reversed"),
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    /// Case-insensitive parse
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(TransactionStatus::Completed),
            "pending" => Ok(TransactionStatus::Pending),
            "failed" => Ok(TransactionStatus::Failed),
            "reversed" => Ok(TransactionStatus::Reversed),
            _ => Err(format!("Unrecognized transaction status: {}", s)),
        }
    }
}

/// Transaction row as stored in `transaction_master`
///
/// Read-only input to every report. `status` and `card_type` keep the exact stored
/// spelling; status comparisons go through [`TransactionRecord::recognized_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub txn_id: i64,

    pub merchant_id: String,

    /// Non-negative transaction amount
    pub amount: Decimal,

    pub status: String,

    pub card_type: String,

    pub txn_date: NaiveDate,

    /// Instant used for hour/day-of-week bucketing
    #[sqlx(rename = "local_txn_datetime")]
    pub txn_timestamp: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,
}

impl TransactionRecord {
    /// Build a record with no timestamps
    pub fn new(
        merchant_id: impl Into<String>,
        amount: Decimal,
        status: impl Into<String>,
        card_type: impl Into<String>,
        txn_date: NaiveDate,
    ) -> Self {
        Self {
            txn_id: 0,
            merchant_id: merchant_id.into(),
            amount,
            status: status.into(),
            card_type: card_type.into(),
            txn_date,
            txn_timestamp: None,
            created_at: None,
        }
    }

    pub fn with_id(mut self, txn_id: i64) -> Self {
        self.txn_id = txn_id;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.txn_timestamp = Some(timestamp);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Status matched case-insensitively against the four named statuses
    pub fn recognized_status(&self) -> Option<TransactionStatus> {
        self.status.parse().ok()
    }

    pub fn has_status(&self, status: TransactionStatus) -> bool {
        self.recognized_status() == Some(status)
    }
}
