pub mod revenue_report;

pub use revenue_report::{
    ForecastDataPoint, GrowthAnalysisResponse, MerchantRevenueData, MonthlyComparison,
    PeriodRevenue, RevenueByMerchantResponse, RevenueByPeriodResponse, RevenueForecastResponse,
    TopPerformersResponse,
};
