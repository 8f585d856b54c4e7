use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::rounding;

/// Days without a transaction after which a merchant counts as inactive
pub const ACTIVITY_WINDOW_DAYS: i64 = 30;

const MERCHANT_ID_PREFIX: &str = "MCH-";

/// Aggregate row produced by the merchant statistics queries
///
/// Every aggregate may come back NULL; [`MerchantSummary::from_stats`] defaults them.
#[derive(Debug, Clone, PartialEq, Default, FromRow)]
pub struct MerchantStatsRow {
    pub merchant_id: String,
    pub total_transactions: Option<i64>,
    pub total_revenue: Option<Decimal>,
    pub completed_count: Option<i64>,
    pub failed_count: Option<i64>,
    pub pending_count: Option<i64>,
    pub last_transaction_date: Option<NaiveDate>,
    pub first_transaction_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchantActivity {
    Active,
    Inactive,
}

impl MerchantActivity {
    /// Active when the last transaction falls within the trailing window ending `today`
    pub fn from_last_transaction(last: Option<NaiveDate>, today: NaiveDate) -> Self {
        let cutoff = today - Duration::days(ACTIVITY_WINDOW_DAYS);
        match last {
            Some(last) if last > cutoff => MerchantActivity::Active,
            _ => MerchantActivity::Inactive,
        }
    }
}

/// Merchant statistics as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantSummary {
    pub merchant_id: String,
    pub merchant_name: String,
    pub total_transactions: u64,
    pub total_revenue: Decimal,
    pub completed_count: u64,
    pub failed_count: u64,
    pub pending_count: u64,
    pub success_rate: f64,
    pub average_transaction_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transaction_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_transaction_date: Option<NaiveDate>,
    pub status: MerchantActivity,
}

fn count(value: Option<i64>) -> u64 {
    value.and_then(|v| u64::try_from(v).ok()).unwrap_or(0)
}

/// `MCH-00001` becomes `Merchant 00001`; other ids are used as-is
pub fn merchant_name(merchant_id: &str) -> String {
    match merchant_id.strip_prefix(MERCHANT_ID_PREFIX) {
        Some(number) => format!("Merchant {}", number),
        None => merchant_id.to_string(),
    }
}

impl MerchantSummary {
    pub fn from_stats(row: MerchantStatsRow, today: NaiveDate) -> Self {
        let total_transactions = count(row.total_transactions);
        let total_revenue = row.total_revenue.unwrap_or(Decimal::ZERO);
        let completed_count = count(row.completed_count);

        let average_transaction_amount = if total_revenue > Decimal::ZERO {
            rounding::average(total_revenue, total_transactions)
        } else {
            Decimal::ZERO
        };

        Self {
            merchant_name: merchant_name(&row.merchant_id),
            merchant_id: row.merchant_id,
            total_transactions,
            total_revenue,
            completed_count,
            failed_count: count(row.failed_count),
            pending_count: count(row.pending_count),
            success_rate: rounding::count_percentage(completed_count, total_transactions),
            average_transaction_amount,
            last_transaction_date: row.last_transaction_date,
            first_transaction_date: row.first_transaction_date,
            status: MerchantActivity::from_last_transaction(row.last_transaction_date, today),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    /// 1-based
    pub current_page: u32,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginationMetadata {
    /// `limit` must be non-zero
    pub fn new(total: u64, limit: u32, offset: u32) -> Self {
        let limit = limit.max(1);
        Self {
            total,
            limit,
            offset,
            current_page: offset / limit + 1,
            total_pages: total.div_ceil(u64::from(limit)),
            has_next: u64::from(offset) + u64::from(limit) < total,
            has_previous: offset > 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantListResponse {
    pub merchants: Vec<MerchantSummary>,
    pub pagination: PaginationMetadata,
}
