use crate::core::aggregate::group_ordered;
use crate::core::rounding;
use crate::modules::analytics::models::{CardDistributionResponse, CardTypeData};
use crate::modules::transactions::models::TransactionRecord;

/// Share of transactions per exact card type string, in first-seen order
pub fn card_distribution(records: &[TransactionRecord]) -> CardDistributionResponse {
    let total_transactions = records.len() as u64;

    let distribution = group_ordered(records, |record| record.card_type.clone())
        .into_iter()
        .map(|group| CardTypeData {
            count: group.count(),
            percentage: rounding::count_percentage(group.count(), total_transactions),
            total_amount: group.total_amount(),
            card_type: group.key,
        })
        .collect();

    CardDistributionResponse {
        distribution,
        total_transactions,
    }
}
