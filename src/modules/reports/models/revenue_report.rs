use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue rolled up for one period bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRevenue {
    pub period: String,
    pub revenue: Decimal,
    pub transaction_count: u64,
    pub average_transaction: Decimal,
}

/// Revenue grouped by day, week or month
///
/// Totals are summed from the bucket rollups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByPeriodResponse {
    pub periods: Vec<PeriodRevenue>,
    pub total_revenue: Decimal,
    pub total_transactions: u64,
    pub group_by: String,
}

/// One ranked merchant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantRevenueData {
    pub merchant_id: String,
    pub revenue: Decimal,
    pub transaction_count: u64,
    pub average_transaction: Decimal,
    /// Share of the returned set's revenue, not of the whole dataset
    pub percentage_of_total: f64,
    /// 1-based, in descending revenue order
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByMerchantResponse {
    pub merchants: Vec<MerchantRevenueData>,
    pub total_revenue: Decimal,
    pub total_merchants: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformersResponse {
    pub top_merchants: Vec<MerchantRevenueData>,
    pub sorted_by: String,
    pub date_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDataPoint {
    pub period: String,
    pub predicted_revenue: Decimal,
    pub lower_bound: Decimal,
    pub upper_bound: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueForecastResponse {
    pub forecast: Vec<ForecastDataPoint>,
    pub historical_data: Vec<PeriodRevenue>,
    pub method: String,
    pub confidence: f64,
}

/// Same calendar month in the two compared years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyComparison {
    /// 1-12
    pub month: u32,
    /// Upper-case English name, e.g. `JANUARY`
    pub month_name: String,
    pub current_year_revenue: Decimal,
    pub previous_year_revenue: Decimal,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAnalysisResponse {
    pub current_year: i32,
    pub comparison_year: i32,
    pub overall_growth_rate: f64,
    pub current_year_total: Decimal,
    pub comparison_year_total: Decimal,
    pub monthly_comparison: Vec<MonthlyComparison>,
}
