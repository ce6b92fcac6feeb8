// Frequency-of-frequencies: how many pairs were seen exactly k times.

use std::collections::BTreeMap;

use serde::Serialize;

use super::aggregate::PairFrequencyTable;

/// One bar of the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    /// Co-occurrence count shared by the pairs in this bucket
    pub frequency: u32,
    /// Number of distinct pairs with that count
    pub pairs: usize,
}

/// Buckets in ascending frequency order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyHistogram {
    pub buckets: Vec<HistogramBucket>,
}

impl FrequencyHistogram {
    pub fn from_table(table: &PairFrequencyTable) -> Self {
        let mut grouped: BTreeMap<u32, usize> = BTreeMap::new();
        for frequency in table.values() {
            *grouped.entry(frequency).or_insert(0) += 1;
        }

        Self {
            buckets: grouped
                .into_iter()
                .map(|(frequency, pairs)| HistogramBucket { frequency, pairs })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Size of the largest bucket (0 when empty).
    pub fn max_pairs(&self) -> usize {
        self.buckets.iter().map(|b| b.pairs).max().unwrap_or(0)
    }

    /// Total number of pairs across all buckets.
    pub fn total_pairs(&self) -> usize {
        self.buckets.iter().map(|b| b.pairs).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CoOccurrenceRecord;
    use crate::pairs::PairAggregator;

    #[test]
    fn test_buckets_ascending() {
        let mut records = vec![CoOccurrenceRecord::new(["a", "b", "c"])];
        records.extend((0..2).map(|_| CoOccurrenceRecord::new(["a", "b"])));
        // a-b: 3, a-c: 1, b-c: 1
        let table = PairAggregator::new().aggregate(&records);
        let histogram = FrequencyHistogram::from_table(&table);
        assert_eq!(
            histogram.buckets,
            vec![
                HistogramBucket { frequency: 1, pairs: 2 },
                HistogramBucket { frequency: 3, pairs: 1 },
            ]
        );
        assert_eq!(histogram.max_pairs(), 2);
        assert_eq!(histogram.total_pairs(), 3);
    }

    #[test]
    fn test_empty_table() {
        let histogram = FrequencyHistogram::from_table(&PairFrequencyTable::default());
        assert!(histogram.is_empty());
        assert_eq!(histogram.max_pairs(), 0);
    }
}
