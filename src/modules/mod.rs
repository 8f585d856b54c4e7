pub mod analytics;
pub mod charts;
pub mod health;
pub mod merchants;
pub mod reports;
pub mod transactions;
