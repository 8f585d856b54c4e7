pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{TransactionListResponse, TransactionRecord, TransactionStatus, TransactionSummary};
pub use repositories::{
    InMemoryTransactionSource, MySqlTransactionRepository, TransactionFilter, TransactionSource,
};
pub use controllers::configure;
pub use services::TransactionService;
