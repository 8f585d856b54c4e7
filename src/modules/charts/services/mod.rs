pub mod chart_projection;
pub mod chart_service;

pub use chart_service::ChartService;
