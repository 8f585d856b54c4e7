use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-period volume for the transaction volume report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDataPoint {
    /// Bucket key (`YYYY-MM-DD` of the day, week Monday or month start)
    pub period: String,
    pub transaction_count: u64,
    pub total_amount: Decimal,
    /// Rounded half-up to 2 places
    pub average_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAnalyticsResponse {
    /// Buckets in first-seen order
    pub data: Vec<VolumeDataPoint>,
    /// The caller's `groupBy` value, echoed verbatim
    pub group_by: String,
    /// `"{start} to {end}"`
    pub date_range: String,
}

/// Status breakdown and success rate
///
/// The four named counters match status case-insensitively while `status_breakdown`
/// is keyed by the stored spelling, so `"Completed"` and `"completed"` are two
/// breakdown entries but one completed counter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRateResponse {
    pub total_transactions: u64,
    pub completed_count: u64,
    pub pending_count: u64,
    pub failed_count: u64,
    pub reversed_count: u64,
    pub success_rate: f64,
    pub status_breakdown: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDataPoint {
    pub period: String,
    pub average_amount: Decimal,
    pub transaction_count: u64,
    /// Change against the previous day's average, absent on the first point and
    /// whenever the previous average is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsResponse {
    pub trends: Vec<TrendDataPoint>,
    pub trend_direction: TrendDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_change_percentage: Option<f64>,
}

/// Transaction count for one (hour, day-of-week) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    /// 0-23, UTC
    pub hour: u32,
    /// 0-6, Sunday = 0
    pub day_of_week: u32,
    pub transaction_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakTimesResponse {
    pub heatmap_data: Vec<HeatmapCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_hour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_transaction_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTypeData {
    pub card_type: String,
    pub count: u64,
    /// Share of all transactions, 2 places
    pub percentage: f64,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDistributionResponse {
    pub distribution: Vec<CardTypeData>,
    pub total_transactions: u64,
}
