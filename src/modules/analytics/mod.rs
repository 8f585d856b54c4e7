pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use services::AnalyticsService;
