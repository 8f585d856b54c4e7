//! PayInsight payment analytics library
//!
//! Read-only reporting over payment transaction records: volume and success-rate
//! analytics, revenue reports with a moving-average forecast, chart projections and
//! merchant statistics, served over actix-web.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::{ApiServices, API_PREFIX};
pub use modules::analytics;
pub use modules::charts;
pub use modules::merchants;
pub use modules::reports;
pub use modules::transactions;
