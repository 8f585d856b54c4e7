pub mod merchant_summary;

pub use merchant_summary::{
    MerchantActivity, MerchantListResponse, MerchantStatsRow, MerchantSummary, PaginationMetadata,
};
