use rust_decimal::Decimal;
use std::collections::HashMap;
use std::hash::Hash;

use crate::core::rounding;
use crate::modules::transactions::models::TransactionRecord;

/// Records sharing a bucket or category key
#[derive(Debug, Clone)]
pub struct AggregateGroup<'a, K> {
    pub key: K,
    pub records: Vec<&'a TransactionRecord>,
}

impl<'a, K> AggregateGroup<'a, K> {
    pub fn count(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn total_amount(&self) -> Decimal {
        self.records.iter().map(|record| record.amount).sum()
    }

    /// Mean amount rounded half-up to 2 places, 0 for an empty group
    pub fn average_amount(&self) -> Decimal {
        rounding::average(self.total_amount(), self.count())
    }
}

/// Group records by `key_fn`, keeping groups in the order their keys first appear
pub fn group_ordered<'a, K, F>(records: &'a [TransactionRecord], key_fn: F) -> Vec<AggregateGroup<'a, K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&TransactionRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<AggregateGroup<'a, K>> = Vec::new();

    for record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&position) => groups[position].records.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(AggregateGroup {
                    key,
                    records: vec![record],
                });
            }
        }
    }

    groups
}

pub fn total_amount(records: &[TransactionRecord]) -> Decimal {
    records.iter().map(|record| record.amount).sum()
}
