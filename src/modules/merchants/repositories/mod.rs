pub mod in_memory;
pub mod merchant_repository;

pub use in_memory::InMemoryMerchantRepository;
pub use merchant_repository::{MerchantStatsRepository, MySqlMerchantRepository};
