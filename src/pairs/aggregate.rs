// Pairwise co-occurrence counting.
//
// Every record is reduced to its set of distinct keywords, sorted, and every
// unordered pair (i, j) with i < j is counted once. Sorting first means each
// pair has a single canonical form, so freq(A, B) and freq(B, A) are the same
// table entry.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use tracing::info;

use crate::input::CoOccurrenceRecord;

/// Pairs must co-occur in more than this many records to be drawn.
pub const DEFAULT_RETENTION_THRESHOLD: u32 = 20;

/// Canonical unordered keyword pair: `low <= high`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct KeywordPair {
    low: String,
    high: String,
}

impl KeywordPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> &str {
        &self.low
    }

    pub fn high(&self) -> &str {
        &self.high
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.low == keyword || self.high == keyword
    }
}

impl std::fmt::Display for KeywordPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \u{2194} {}", self.low, self.high)
    }
}

/// All distinct unordered pairs of one record's keywords.
///
/// A record with `n` distinct keywords yields exactly `n * (n - 1) / 2`
/// pairs, in sorted order, with no self-pairs.
pub fn record_pairs<S: AsRef<str>>(keywords: &[S]) -> Vec<KeywordPair> {
    let distinct: BTreeSet<&str> = keywords.iter().map(AsRef::as_ref).collect();
    sorted_pairs(&distinct.into_iter().collect::<Vec<_>>())
}

fn sorted_pairs(sorted: &[&str]) -> Vec<KeywordPair> {
    let mut pairs = Vec::with_capacity(sorted.len() * sorted.len().saturating_sub(1) / 2);
    for (i, low) in sorted.iter().enumerate() {
        for high in &sorted[i + 1..] {
            pairs.push(KeywordPair {
                low: low.to_string(),
                high: high.to_string(),
            });
        }
    }
    pairs
}

/// A pair that cleared the retention threshold, with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetainedPair {
    pub pair: KeywordPair,
    pub frequency: u32,
}

/// Symmetric pair -> count table, remembering the order pairs were first seen.
#[derive(Debug, Clone, Default)]
pub struct PairFrequencyTable {
    counts: HashMap<KeywordPair, u32>,
    first_seen: Vec<KeywordPair>,
}

impl PairFrequencyTable {
    fn record(&mut self, pair: KeywordPair) {
        match self.counts.get_mut(&pair) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(pair.clone(), 1);
                self.first_seen.push(pair);
            }
        }
    }

    /// Count for the pair (a, b) in either order; 0 if never observed.
    pub fn frequency(&self, a: &str, b: &str) -> u32 {
        self.counts
            .get(&KeywordPair::new(a, b))
            .copied()
            .unwrap_or(0)
    }

    pub fn get(&self, pair: &KeywordPair) -> Option<u32> {
        self.counts.get(pair).copied()
    }

    /// Number of distinct pairs observed.
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Distinct pairs with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeywordPair, u32)> + '_ {
        self.first_seen.iter().map(|pair| (pair, self.counts[pair]))
    }

    /// The multiset of counts (one value per distinct pair).
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.values().copied()
    }

    /// Pairs whose count is strictly greater than `threshold`, first-seen order.
    pub fn retained(&self, threshold: u32) -> Vec<RetainedPair> {
        self.iter()
            .filter(|&(_, frequency)| frequency > threshold)
            .map(|(pair, frequency)| RetainedPair {
                pair: pair.clone(),
                frequency,
            })
            .collect()
    }
}

/// Builds a PairFrequencyTable from keyword records.
///
/// With a vocabulary set, keywords outside it are dropped before pairing;
/// the remaining keywords of the record are still paired normally.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairAggregator<'a> {
    vocabulary: Option<&'a HashSet<String>>,
}

impl<'a> PairAggregator<'a> {
    pub fn new() -> Self {
        Self { vocabulary: None }
    }

    pub fn with_vocabulary(vocabulary: &'a HashSet<String>) -> Self {
        Self {
            vocabulary: Some(vocabulary),
        }
    }

    fn is_known(&self, keyword: &str) -> bool {
        self.vocabulary.map_or(true, |v| v.contains(keyword))
    }

    pub fn aggregate(&self, records: &[CoOccurrenceRecord]) -> PairFrequencyTable {
        let mut table = PairFrequencyTable::default();
        let mut dropped_keywords = 0usize;

        for record in records {
            let mut distinct: BTreeSet<&str> = BTreeSet::new();
            for keyword in &record.keywords {
                if self.is_known(keyword) {
                    distinct.insert(keyword.as_str());
                } else {
                    dropped_keywords += 1;
                }
            }
            if distinct.len() < 2 {
                continue;
            }
            let sorted: Vec<&str> = distinct.into_iter().collect();
            for pair in sorted_pairs(&sorted) {
                table.record(pair);
            }
        }

        info!(
            records = records.len(),
            distinct_pairs = table.len(),
            dropped_keywords,
            "Aggregated keyword pairs"
        );

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_canonical() {
        assert_eq!(KeywordPair::new("b", "a"), KeywordPair::new("a", "b"));
        let pair = KeywordPair::new("zeta", "alpha");
        assert_eq!(pair.low(), "alpha");
        assert_eq!(pair.high(), "zeta");
    }

    #[test]
    fn test_record_pairs_dedupes() {
        let pairs = record_pairs(&["b", "a", "b", "c", "a"]);
        assert_eq!(
            pairs,
            vec![
                KeywordPair::new("a", "b"),
                KeywordPair::new("a", "c"),
                KeywordPair::new("b", "c"),
            ]
        );
    }

    #[test]
    fn test_single_keyword_record_contributes_nothing() {
        let records = vec![CoOccurrenceRecord::new(["a", "a", "a"])];
        let table = PairAggregator::new().aggregate(&records);
        assert!(table.is_empty());
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let records = vec![
            CoOccurrenceRecord::new(["c", "d"]),
            CoOccurrenceRecord::new(["a", "b"]),
            CoOccurrenceRecord::new(["d", "c"]),
        ];
        let table = PairAggregator::new().aggregate(&records);
        let order: Vec<String> = table.iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(order, vec!["c \u{2194} d", "a \u{2194} b"]);
        assert_eq!(table.frequency("d", "c"), 2);
    }

    #[test]
    fn test_retention_is_exclusive() {
        let records: Vec<_> = (0..5).map(|_| CoOccurrenceRecord::new(["a", "b"])).collect();
        let table = PairAggregator::new().aggregate(&records);
        assert!(table.retained(5).is_empty());
        assert_eq!(table.retained(4).len(), 1);
    }
}
