pub mod analytics_report;

pub use analytics_report::{
    CardDistributionResponse, CardTypeData, HeatmapCell, PeakTimesResponse, SuccessRateResponse,
    TrendDataPoint, TrendDirection, TrendsResponse, VolumeAnalyticsResponse, VolumeDataPoint,
};
