pub mod transaction_listing;
pub mod transaction_record;

pub use transaction_listing::{TransactionListResponse, TransactionSummary};
pub use transaction_record::{TransactionRecord, TransactionStatus};
