pub mod analytics_service;
pub mod distribution_analyzer;
pub mod trend_analyzer;
pub mod volume_analyzer;

pub use analytics_service::AnalyticsService;
