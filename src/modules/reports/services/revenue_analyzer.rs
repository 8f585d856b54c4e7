use chrono::{Datelike, Month};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::core::aggregate::{group_ordered, AggregateGroup};
use crate::core::{rounding, DateRange, GroupBy};
use crate::modules::reports::models::{
    GrowthAnalysisResponse, MerchantRevenueData, MonthlyComparison, PeriodRevenue,
    RevenueByMerchantResponse, RevenueByPeriodResponse, TopPerformersResponse,
};
use crate::modules::transactions::models::TransactionRecord;

/// Merchant count used when the caller passes no limit or a non-positive one
pub const DEFAULT_MERCHANT_LIMIT: usize = 10;

pub fn effective_limit(limit: Option<i64>) -> usize {
    match limit {
        Some(limit) if limit > 0 => usize::try_from(limit).unwrap_or(DEFAULT_MERCHANT_LIMIT),
        _ => DEFAULT_MERCHANT_LIMIT,
    }
}

impl<K> From<AggregateGroup<'_, K>> for PeriodRevenue
where
    K: ToString,
{
    fn from(group: AggregateGroup<'_, K>) -> Self {
        Self {
            period: group.key.to_string(),
            revenue: group.total_amount(),
            transaction_count: group.count(),
            average_transaction: group.average_amount(),
        }
    }
}

/// Revenue per period bucket, with totals summed from the buckets
pub fn revenue_by_period(records: &[TransactionRecord], group_by: &str) -> RevenueByPeriodResponse {
    let mode = GroupBy::parse_period(group_by);

    let periods: Vec<PeriodRevenue> =
        group_ordered(records, |record| mode.bucket_key(record.txn_date))
            .into_iter()
            .map(PeriodRevenue::from)
            .collect();

    let total_revenue = periods.iter().map(|period| period.revenue).sum();
    let total_transactions = periods.iter().map(|period| period.transaction_count).sum();

    RevenueByPeriodResponse {
        periods,
        total_revenue,
        total_transactions,
        group_by: group_by.to_string(),
    }
}

/// Merchants by descending revenue, truncated to `limit` and ranked from 1
///
/// Ties keep the order in which merchants first appear. Shares are taken against the
/// revenue of the returned merchants only.
pub fn rank_merchants(records: &[TransactionRecord], limit: usize) -> Vec<MerchantRevenueData> {
    let mut merchants: Vec<MerchantRevenueData> =
        group_ordered(records, |record| record.merchant_id.clone())
            .into_iter()
            .map(|group| MerchantRevenueData {
                revenue: group.total_amount(),
                transaction_count: group.count(),
                average_transaction: group.average_amount(),
                merchant_id: group.key,
                percentage_of_total: 0.0,
                rank: 0,
            })
            .collect();

    merchants.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    merchants.truncate(limit);

    let total: Decimal = merchants.iter().map(|merchant| merchant.revenue).sum();
    for (position, merchant) in merchants.iter_mut().enumerate() {
        merchant.rank = position as u32 + 1;
        merchant.percentage_of_total =
            rounding::ratio_percentage(merchant.revenue, total).unwrap_or(0.0);
    }

    merchants
}

pub fn revenue_by_merchant(records: &[TransactionRecord], limit: usize) -> RevenueByMerchantResponse {
    let merchants = rank_merchants(records, limit);
    let total_revenue = merchants.iter().map(|merchant| merchant.revenue).sum();

    RevenueByMerchantResponse {
        total_merchants: merchants.len(),
        total_revenue,
        merchants,
    }
}

/// Top merchants for a date range
///
/// `sort_by` is echoed back but the ranking is always by revenue.
pub fn top_performers(
    records: &[TransactionRecord],
    limit: usize,
    sort_by: &str,
    range: DateRange,
) -> TopPerformersResponse {
    TopPerformersResponse {
        top_merchants: rank_merchants(records, limit),
        sorted_by: sort_by.to_string(),
        date_range: range.to_string(),
    }
}

/// Month-by-month revenue of `current_year` against `comparison_year`
pub fn analyze_growth(
    records: &[TransactionRecord],
    current_year: i32,
    comparison_year: i32,
) -> GrowthAnalysisResponse {
    let mut revenue: HashMap<(i32, u32), Decimal> = HashMap::new();
    for record in records {
        *revenue
            .entry((record.txn_date.year(), record.txn_date.month()))
            .or_insert(Decimal::ZERO) += record.amount;
    }
    let revenue_for = |year: i32, month: u32| {
        revenue
            .get(&(year, month))
            .copied()
            .unwrap_or(Decimal::ZERO)
    };

    let monthly_comparison: Vec<MonthlyComparison> = (1..=12u32)
        .map(|month| {
            let current_year_revenue = revenue_for(current_year, month);
            let previous_year_revenue = revenue_for(comparison_year, month);
            MonthlyComparison {
                month,
                month_name: month_name(month),
                growth_rate: growth_rate(current_year_revenue, previous_year_revenue),
                current_year_revenue,
                previous_year_revenue,
            }
        })
        .collect();

    let current_year_total: Decimal = monthly_comparison
        .iter()
        .map(|row| row.current_year_revenue)
        .sum();
    let comparison_year_total: Decimal = monthly_comparison
        .iter()
        .map(|row| row.previous_year_revenue)
        .sum();

    GrowthAnalysisResponse {
        current_year,
        comparison_year,
        overall_growth_rate: growth_rate(current_year_total, comparison_year_total),
        current_year_total,
        comparison_year_total,
        monthly_comparison,
    }
}

/// Relative change, 0.0 unless the previous value is positive
fn growth_rate(current: Decimal, previous: Decimal) -> f64 {
    if previous <= Decimal::ZERO {
        return 0.0;
    }
    rounding::change_percentage(current, previous).unwrap_or(0.0)
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .map(|month| month.name().to_uppercase())
        .unwrap_or_default()
}
