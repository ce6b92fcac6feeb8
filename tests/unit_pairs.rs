// Unit tests for pair counting and the frequency histogram.

use std::collections::HashSet;

use keyweb::input::CoOccurrenceRecord;
use keyweb::pairs::{
    record_pairs, FrequencyHistogram, HistogramBucket, KeywordPair, PairAggregator,
    DEFAULT_RETENTION_THRESHOLD,
};

// ============================================================
// record_pairs
// ============================================================

#[test]
fn four_distinct_keywords_give_six_pairs() {
    let pairs = record_pairs(&["d", "a", "c", "b"]);
    assert_eq!(pairs.len(), 6);
    assert!(pairs.iter().all(|p| p.low() < p.high()));
}

#[test]
fn duplicates_do_not_add_pairs() {
    assert_eq!(record_pairs(&["a", "a", "b", "b", "b"]).len(), 1);
}

#[test]
fn empty_record_gives_no_pairs() {
    let empty: [&str; 0] = [];
    assert!(record_pairs(&empty).is_empty());
}

// ============================================================
// PairAggregator
// ============================================================

#[test]
fn pair_counted_once_per_record() {
    let records = vec![
        CoOccurrenceRecord::new(["a", "b", "a", "b"]),
        CoOccurrenceRecord::new(["b", "a"]),
    ];
    let table = PairAggregator::new().aggregate(&records);
    assert_eq!(table.frequency("a", "b"), 2);
    assert_eq!(table.frequency("b", "a"), 2);
}

#[test]
fn vocabulary_drops_unknown_keywords_only() {
    let vocabulary: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let records = vec![CoOccurrenceRecord::new(["a", "x", "b", "c"])];
    let table = PairAggregator::with_vocabulary(&vocabulary).aggregate(&records);

    assert_eq!(table.len(), 3);
    assert_eq!(table.frequency("a", "x"), 0);
    assert_eq!(table.frequency("b", "c"), 1);
}

#[test]
fn record_left_with_one_known_keyword_contributes_nothing() {
    let vocabulary: HashSet<String> = ["a".to_string()].into();
    let records = vec![CoOccurrenceRecord::new(["a", "x", "y"])];
    let table = PairAggregator::with_vocabulary(&vocabulary).aggregate(&records);
    assert!(table.is_empty());
}

#[test]
fn retained_keeps_first_seen_order_and_counts() {
    let mut records: Vec<CoOccurrenceRecord> = Vec::new();
    records.extend((0..25).map(|_| CoOccurrenceRecord::new(["m", "n"])));
    records.extend((0..22).map(|_| CoOccurrenceRecord::new(["a", "b"])));
    records.extend((0..3).map(|_| CoOccurrenceRecord::new(["x", "y"])));

    let table = PairAggregator::new().aggregate(&records);
    let retained = table.retained(DEFAULT_RETENTION_THRESHOLD);

    assert_eq!(retained.len(), 2);
    assert_eq!(retained[0].pair, KeywordPair::new("n", "m"));
    assert_eq!(retained[0].frequency, 25);
    assert_eq!(retained[1].pair, KeywordPair::new("a", "b"));
}

#[test]
fn unobserved_pair_has_zero_frequency() {
    let table = PairAggregator::new().aggregate(&[]);
    assert_eq!(table.frequency("a", "b"), 0);
    assert!(table.get(&KeywordPair::new("a", "b")).is_none());
}

// ============================================================
// FrequencyHistogram
// ============================================================

#[test]
fn histogram_counts_pairs_per_frequency() {
    let mut records = vec![CoOccurrenceRecord::new(["a", "b", "c", "d"])];
    records.extend((0..3).map(|_| CoOccurrenceRecord::new(["a", "b"])));
    records.push(CoOccurrenceRecord::new(["c", "d"]));
    // a-b: 4, c-d: 2, a-c/a-d/b-c/b-d: 1
    let table = PairAggregator::new().aggregate(&records);
    let histogram = FrequencyHistogram::from_table(&table);

    assert_eq!(
        histogram.buckets,
        vec![
            HistogramBucket { frequency: 1, pairs: 4 },
            HistogramBucket { frequency: 2, pairs: 1 },
            HistogramBucket { frequency: 4, pairs: 1 },
        ]
    );
    assert_eq!(histogram.total_pairs(), table.len());
}
