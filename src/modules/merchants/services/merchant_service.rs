use std::sync::Arc;
use tracing::{info, warn};

use crate::core::{AppError, Clock, Result};
use crate::modules::merchants::models::{MerchantListResponse, MerchantSummary, PaginationMetadata};
use crate::modules::merchants::repositories::MerchantStatsRepository;

pub const DEFAULT_MERCHANT_PAGE: u32 = 10;

pub const MAX_MERCHANT_PAGE: u32 = 100;

/// Merchant statistics listing and lookup
pub struct MerchantService {
    repository: Arc<dyn MerchantStatsRepository>,
    clock: Arc<dyn Clock>,
}

impl MerchantService {
    pub fn new(repository: Arc<dyn MerchantStatsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// One page of merchant statistics
    ///
    /// A blank `search` is treated as no search. The page and the total count are
    /// queried concurrently.
    pub async fn list_merchants(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> Result<MerchantListResponse> {
        let limit = limit.clamp(1, MAX_MERCHANT_PAGE);
        let search = search.map(str::trim).filter(|term| !term.is_empty());
        info!(limit, offset, search = search.unwrap_or("none"), "Listing merchants");

        let (rows, total) = tokio::try_join!(
            self.repository.list_stats(search, limit, offset),
            self.repository.count(search),
        )?;

        let today = self.clock.today();
        let merchants: Vec<MerchantSummary> = rows
            .into_iter()
            .map(|row| MerchantSummary::from_stats(row, today))
            .collect();

        info!(found = merchants.len(), total, "Listed merchants");

        Ok(MerchantListResponse {
            merchants,
            pagination: PaginationMetadata::new(total, limit, offset),
        })
    }

    pub async fn get_merchant(&self, merchant_id: &str) -> Result<MerchantSummary> {
        info!(merchant_id, "Getting merchant statistics");

        match self.repository.find_stats(merchant_id).await? {
            Some(row) => Ok(MerchantSummary::from_stats(row, self.clock.today())),
            None => {
                warn!(merchant_id, "Merchant not found");
                Err(AppError::not_found(format!("Merchant {}", merchant_id)))
            }
        }
    }
}
