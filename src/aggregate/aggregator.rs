use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::BucketKey;

/// Request counts per hour bucket.
///
/// Iteration follows the order in which buckets were first seen, which is the
/// tie-break order used when ranking. Recording consumes the table and hands
/// back the next one, so an earlier state can only be kept around as an
/// explicit `clone()` and is never changed underneath its holder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTable {
    entries: Vec<(BucketKey, u64)>,
    positions: HashMap<BucketKey, usize>,
}

impl AggregateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold step: the same table with `key` counted once more.
    #[must_use]
    pub fn record(mut self, key: BucketKey) -> Self {
        match self.positions.entry(key) {
            Entry::Occupied(slot) => {
                self.entries[*slot.get()].1 += 1;
            }
            Entry::Vacant(slot) => {
                self.entries.push((slot.key().clone(), 1));
                slot.insert(self.entries.len() - 1);
            }
        }
        self
    }

    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = BucketKey>,
    {
        keys.into_iter().fold(Self::new(), Self::record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &BucketKey) -> Option<u64> {
        self.positions.get(key).map(|&i| self.entries[i].1)
    }

    /// Sum of all counts, i.e. the number of timestamps recorded.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BucketKey, u64)> + '_ {
        self.entries.iter().map(|(key, count)| (key, *count))
    }
}

impl FromIterator<BucketKey> for AggregateTable {
    fn from_iter<I: IntoIterator<Item = BucketKey>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl Extend<BucketKey> for AggregateTable {
    fn extend<I: IntoIterator<Item = BucketKey>>(&mut self, iter: I) {
        let table = std::mem::take(self);
        *self = iter.into_iter().fold(table, Self::record);
    }
}
