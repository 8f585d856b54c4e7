pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use repositories::{InMemoryMerchantRepository, MerchantStatsRepository, MySqlMerchantRepository};
pub use controllers::configure;
pub use services::MerchantService;
