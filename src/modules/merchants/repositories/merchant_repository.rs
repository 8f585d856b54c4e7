use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::core::Result;
use crate::modules::merchants::models::MerchantStatsRow;

const STATS_COLUMNS: &str = "merchant_id, \
     COUNT(*) AS total_transactions, \
     SUM(amount) AS total_revenue, \
     CAST(SUM(CASE WHEN status = 'completed' THEN 1 ELSE 0 END) AS SIGNED) AS completed_count, \
     CAST(SUM(CASE WHEN status = 'failed' THEN 1 ELSE 0 END) AS SIGNED) AS failed_count, \
     CAST(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END) AS SIGNED) AS pending_count, \
     MAX(txn_date) AS last_transaction_date, \
     MIN(txn_date) AS first_transaction_date";

/// Per-merchant aggregate statistics over all transactions
#[async_trait]
pub trait MerchantStatsRepository: Send + Sync {
    /// One page of merchants ordered by id, optionally narrowed by a
    /// case-insensitive substring of the merchant id
    async fn list_stats(
        &self,
        search: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<MerchantStatsRow>>;

    /// Number of distinct merchants matching `search`
    async fn count(&self, search: Option<&str>) -> Result<u64>;

    async fn find_stats(&self, merchant_id: &str) -> Result<Option<MerchantStatsRow>>;
}

/// MySQL-backed merchant statistics over `transaction_master`
pub struct MySqlMerchantRepository {
    pool: MySqlPool,
}

impl MySqlMerchantRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn search_pattern(search: &str) -> String {
    format!("%{}%", search.to_lowercase())
}

#[async_trait]
impl MerchantStatsRepository for MySqlMerchantRepository {
    async fn list_stats(
        &self,
        search: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<MerchantStatsRow>> {
        let mut query: QueryBuilder<MySql> = QueryBuilder::new("SELECT ");
        query.push(STATS_COLUMNS);
        query.push(" FROM transaction_master");
        if let Some(search) = search {
            query
                .push(" WHERE LOWER(merchant_id) LIKE ")
                .push_bind(search_pattern(search));
        }
        query.push(" GROUP BY merchant_id ORDER BY merchant_id LIMIT ");
        query.push_bind(limit);
        query.push(" OFFSET ");
        query.push_bind(offset);

        let rows = query
            .build_query_as::<MerchantStatsRow>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), limit, offset, "Fetched merchant statistics");

        Ok(rows)
    }

    async fn count(&self, search: Option<&str>) -> Result<u64> {
        let total: i64 = match search {
            Some(search) => {
                sqlx::query_scalar(
                    r#"
                    SELECT COUNT(DISTINCT merchant_id)
                    FROM transaction_master
                    WHERE LOWER(merchant_id) LIKE ?
                    "#,
                )
                .bind(search_pattern(search))
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(DISTINCT merchant_id) FROM transaction_master")
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn find_stats(&self, merchant_id: &str) -> Result<Option<MerchantStatsRow>> {
        let row = sqlx::query_as::<_, MerchantStatsRow>(&format!(
            r#"
            SELECT {}
            FROM transaction_master
            WHERE merchant_id = ?
            GROUP BY merchant_id
            "#,
            STATS_COLUMNS
        ))
        .bind(merchant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
