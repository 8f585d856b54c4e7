pub mod forecast;
pub mod report_service;
pub mod revenue_analyzer;

pub use report_service::ReportService;
