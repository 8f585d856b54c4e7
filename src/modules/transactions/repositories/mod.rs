pub mod in_memory;
pub mod transaction_repository;

pub use in_memory::InMemoryTransactionSource;
pub use transaction_repository::{MySqlTransactionRepository, TransactionFilter, TransactionSource};
